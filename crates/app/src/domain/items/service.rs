//! Items service.

use async_trait::async_trait;
use mockall::automock;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::domain::items::{
    errors::ItemsServiceError,
    records::{ItemQuery, ItemRecord, ItemUuid, NewItem},
};

/// Storage and search facade for items.
///
/// The engine does not depend on this; it exists for the HTTP layer,
/// which stores items and searches them by name, description or EAN.
#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Stores an item, assigning it a fresh identifier.
    async fn save_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError>;

    /// Returns the stored items satisfying `query`, ordered by name.
    async fn search_items(&self, query: ItemQuery) -> Result<Vec<ItemRecord>, ItemsServiceError>;
}

/// Process-local item store.
#[derive(Debug, Default)]
pub struct InMemoryItemsService {
    items: RwLock<FxHashMap<ItemUuid, ItemRecord>>,
}

#[async_trait]
impl ItemsService for InMemoryItemsService {
    async fn save_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError> {
        let record = ItemRecord {
            uuid: ItemUuid::new(),
            name: item.name,
            ean: item.ean,
            price: item.price,
            description: item.description,
            category: item.category,
        };

        self.items.write().insert(record.uuid, record.clone());

        debug!("stored item {}", record.uuid);

        Ok(record)
    }

    async fn search_items(&self, query: ItemQuery) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        let mut matches: Vec<ItemRecord> = self
            .items
            .read()
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();

        // Map iteration order is arbitrary; responses must not be.
        matches.sort_by(|a, b| a.name.cmp(&b.name).then(a.uuid.cmp(&b.uuid)));

        Ok(matches)
    }
}
