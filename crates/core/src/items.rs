//! Items

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of item categories a line item can carry.
///
/// Categories travel over the wire and through configuration in their
/// SCREAMING_SNAKE_CASE form (`SHIRT`, `BELT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Shirts.
    Shirt,
    /// Belts.
    Belt,
    /// Socks.
    Socks,
    /// Trousers.
    Trousers,
}

impl ItemCategory {
    /// The configuration/wire name of this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shirt => "SHIRT",
            Self::Belt => "BELT",
            Self::Socks => "SOCKS",
            Self::Trousers => "TROUSERS",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a configured category name is not part of the
/// closed [`ItemCategory`] set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item category `{0}`")]
pub struct UnknownCategory(String);

impl FromStr for ItemCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SHIRT" => Ok(Self::Shirt),
            "BELT" => Ok(Self::Belt),
            "SOCKS" => Ok(Self::Socks),
            "TROUSERS" => Ok(Self::Trousers),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// An immutable priced line item.
///
/// The engine only ever reads items; ownership stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    price: Decimal,
    category: ItemCategory,
}

impl Item {
    /// Creates a new item with the given price and category.
    pub fn new(price: Decimal, category: ItemCategory) -> Self {
        Self { price, category }
    }

    /// Returns the price of the item.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the category of the item.
    pub fn category(&self) -> ItemCategory {
        self.category
    }
}
