//! Price calculator
//!
//! The evaluator over the configured discount rules. Every rule sees the
//! original basket and code and produces its own candidate total; the
//! calculator keeps the minimum, because only the single best discount
//! ever applies. Candidates are never summed or chained.

use rust_decimal::Decimal;

use crate::{
    discounts::{DiscountError, DiscountRule},
    items::{Item, ItemCategory},
    pricing::round_to_currency,
};

/// Settings for the standard rule pair.
///
/// Values arrive from external configuration already typed; the historical
/// deployment constants are the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountConfig {
    /// Code customers supply to receive the code discount.
    pub code: String,
    /// Percentage taken off when the code matches.
    pub code_percent: Decimal,
    /// Category that triggers the category discount.
    pub item_category: ItemCategory,
    /// Percentage taken off when the category is present.
    pub item_percent: Decimal,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            code: "SPECIAL_CODE_15".to_owned(),
            code_percent: Decimal::from(20),
            item_category: ItemCategory::Belt,
            item_percent: Decimal::TEN,
        }
    }
}

/// Evaluates every configured rule against a basket and settles on the
/// lowest candidate total.
///
/// The rule list is frozen at construction; a calculator is therefore
/// freely shareable across threads.
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    rules: Vec<DiscountRule>,
}

impl PriceCalculator {
    /// Builds the standard calculator: one category rule and one code
    /// rule, configured from `config`.
    pub fn new(config: DiscountConfig) -> Self {
        Self::from_rules(vec![
            DiscountRule::Category {
                category: config.item_category,
                percent: config.item_percent,
            },
            DiscountRule::Code {
                code: config.code,
                percent: config.code_percent,
            },
        ])
    }

    /// Builds a calculator over an arbitrary ordered rule set.
    pub fn from_rules(rules: Vec<DiscountRule>) -> Self {
        Self { rules }
    }

    /// Computes the final basket price.
    ///
    /// Returns `Ok(None)` only when no rules are configured: there is
    /// nothing to compute and no identity element for the reduction. An
    /// empty basket is not an error; every rule prices it at zero.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidPercentage`] when a matching rule
    /// carries a percentage outside `[0, 100)`. Rule errors are
    /// configuration mistakes and propagate instead of being absorbed by
    /// the minimum.
    pub fn calculate(
        &self,
        items: &[Item],
        code: &str,
    ) -> Result<Option<Decimal>, DiscountError> {
        let mut best: Option<Decimal> = None;

        for rule in &self.rules {
            let candidate = rule.calculate(items, code)?;

            best = Some(match best {
                Some(current) => current.min(candidate),
                None => candidate,
            });
        }

        Ok(best.map(round_to_currency))
    }
}
