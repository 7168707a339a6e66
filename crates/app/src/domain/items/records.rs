//! Item Records

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use till::items::ItemCategory;

/// Item UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemUuid(Uuid);

impl ItemUuid {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Unwraps into the underlying UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for ItemUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ItemUuid {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl From<ItemUuid> for Uuid {
    fn from(value: ItemUuid) -> Self {
        value.into_uuid()
    }
}

/// A stored item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    /// Identifier assigned when the item was stored.
    pub uuid: ItemUuid,
    /// Display name.
    pub name: String,
    /// European article number.
    pub ean: String,
    /// Unit price.
    pub price: Decimal,
    /// Free-form description.
    pub description: String,
    /// Category tag used by the category discount rule.
    pub category: ItemCategory,
}

/// An item about to be stored; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Display name.
    pub name: String,
    /// European article number.
    pub ean: String,
    /// Unit price.
    pub price: Decimal,
    /// Free-form description.
    pub description: String,
    /// Category tag used by the category discount rule.
    pub category: ItemCategory,
}

/// Search filters for stored items.
///
/// Every provided (non-empty) filter must hold: name and description
/// match by substring, EAN matches exactly. A blank query matches every
/// item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    /// Substring filter on the item name.
    pub name: String,
    /// Substring filter on the item description.
    pub description: String,
    /// Exact filter on the EAN.
    pub ean: String,
}

impl ItemQuery {
    /// Whether `item` satisfies every provided filter.
    pub fn matches(&self, item: &ItemRecord) -> bool {
        let name = self.name.is_empty() || item.name.contains(&self.name);
        let description =
            self.description.is_empty() || item.description.contains(&self.description);
        let ean = self.ean.is_empty() || item.ean == self.ean;

        name && description && ean
    }
}
