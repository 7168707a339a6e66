//! App Context

use std::sync::Arc;

use till::calculator::{DiscountConfig, PriceCalculator};

use crate::domain::items::{InMemoryItemsService, ItemsService};

/// The services the HTTP layer works against.
#[derive(Clone)]
pub struct AppContext {
    /// The configured price calculator.
    pub pricing: Arc<PriceCalculator>,
    /// Item storage and search.
    pub items: Arc<dyn ItemsService>,
}

impl AppContext {
    /// Builds an application context backed by the in-process item store.
    pub fn in_memory(config: DiscountConfig) -> Self {
        Self {
            pricing: Arc::new(PriceCalculator::new(config)),
            items: Arc::new(InMemoryItemsService::default()),
        }
    }

    /// Builds an application context from explicit services.
    pub fn new(pricing: PriceCalculator, items: Arc<dyn ItemsService>) -> Self {
        Self {
            pricing: Arc::new(pricing),
            items,
        }
    }
}
