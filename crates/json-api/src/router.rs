//! App Router

use salvo::Router;

use crate::{healthcheck, items, pricing};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("price")
                .push(Router::with_path("calculate").post(pricing::calculate::handler)),
        )
        .push(
            Router::with_path("items")
                .get(items::search::handler)
                .post(items::save::handler),
        )
}
