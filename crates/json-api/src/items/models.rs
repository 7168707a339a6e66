//! Item DTOs

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till::items::ItemCategory;
use till_app::domain::items::records::ItemRecord;

/// A stored item as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// Identifier assigned by the store.
    pub uuid: Uuid,
    /// Display name.
    pub name: String,
    /// European article number.
    pub ean: String,
    /// Unit price.
    pub price: Decimal,
    /// Free-form description.
    pub description: String,
    /// Category tag.
    #[salvo(schema(value_type = String))]
    pub category: ItemCategory,
}

impl From<ItemRecord> for ItemResponse {
    fn from(record: ItemRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            name: record.name,
            ean: record.ean,
            price: record.price,
            description: record.description,
            category: record.category,
        }
    }
}
