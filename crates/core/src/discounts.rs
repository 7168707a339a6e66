//! Discounts
//!
//! Shared discount math plus the closed set of discount rules. Every
//! rule produces a candidate total for the whole basket: the discounted
//! total when its match criterion holds, the undiscounted total
//! otherwise. Rules never inspect or build on each other's results.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    items::{Item, ItemCategory},
    pricing::undiscounted_total,
};

/// Errors specific to discount calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// A rule was configured with a percentage outside `[0, 100)`.
    ///
    /// A discount of 100% or more would silently zero out (or invert)
    /// totals, so it is rejected rather than clamped.
    #[error("discount percentage {0} is outside the valid range [0, 100)")]
    InvalidPercentage(Decimal),
}

/// The factor a discount percentage applies to a total: `(100 - pct) / 100`.
///
/// # Errors
///
/// Returns [`DiscountError::InvalidPercentage`] when `percent` is negative
/// or at least 100.
pub fn multiplier(percent: Decimal) -> Result<Decimal, DiscountError> {
    if percent < Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
        return Err(DiscountError::InvalidPercentage(percent));
    }

    Ok((Decimal::ONE_HUNDRED - percent) / Decimal::ONE_HUNDRED)
}

/// The basket total with a percentage discount applied.
///
/// # Errors
///
/// Returns [`DiscountError::InvalidPercentage`] when `percent` is outside
/// the valid range.
pub fn discounted_total(items: &[Item], percent: Decimal) -> Result<Decimal, DiscountError> {
    Ok(undiscounted_total(items) * multiplier(percent)?)
}

/// A configured discount rule.
///
/// Configuration is immutable once the rule exists. Matching either looks
/// at the basket (category rule) or at the caller-supplied code string
/// (code rule); in both cases a match discounts the whole basket total.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountRule {
    /// Discounts the basket when it contains at least one item of the
    /// configured category, however many qualifying items there are.
    Category {
        /// The category that triggers the discount.
        category: ItemCategory,
        /// Percentage taken off the basket total on a match.
        percent: Decimal,
    },

    /// Discounts the basket when the supplied code equals the configured
    /// code exactly. Case-sensitive, no trimming.
    Code {
        /// The code that triggers the discount.
        code: String,
        /// Percentage taken off the basket total on a match.
        percent: Decimal,
    },
}

impl DiscountRule {
    /// Computes this rule's candidate total for the basket.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidPercentage`] when the rule matches
    /// and its configured percentage is outside `[0, 100)`.
    pub fn calculate(&self, items: &[Item], code: &str) -> Result<Decimal, DiscountError> {
        match self {
            Self::Category { category, percent } => {
                if items.iter().any(|item| item.category() == *category) {
                    discounted_total(items, *percent)
                } else {
                    Ok(undiscounted_total(items))
                }
            }
            Self::Code {
                code: configured,
                percent,
            } => {
                if code == configured {
                    discounted_total(items, *percent)
                } else {
                    Ok(undiscounted_total(items))
                }
            }
        }
    }
}
