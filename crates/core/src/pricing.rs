//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};

use crate::items::Item;

/// Sums the prices of all items in the basket without any discount.
///
/// An empty basket totals zero; it is a valid input, not an error.
pub fn undiscounted_total(items: &[Item]) -> Decimal {
    items.iter().map(Item::price).sum()
}

/// Rounds a computed price to currency precision.
///
/// Two fractional digits, midpoint rounded away from zero, so `33.335`
/// becomes `33.34`.
pub fn round_to_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
