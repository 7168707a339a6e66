//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use till::calculator::{DiscountConfig, PriceCalculator};
use till_app::{context::AppContext, domain::items::MockItemsService};

/// An items mock that rejects every storage call.
pub(crate) fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_save_item().never();
    items.expect_search_items().never();

    items
}

/// App context with the default discount rules and the given items mock.
pub(crate) fn app_context(items: MockItemsService) -> AppContext {
    AppContext::new(
        PriceCalculator::new(DiscountConfig::default()),
        Arc::new(items),
    )
}

/// A service routing to `route` with the given items mock injected.
pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app_context(items))).push(route))
}

/// A service routing to `route` where item storage must stay untouched.
pub(crate) fn pricing_service(route: Router) -> Service {
    items_service(strict_items_mock(), route)
}
