//! Search Items Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use till_app::{context::AppContext, domain::items::records::ItemQuery};

use crate::{extensions::*, items::models::ItemResponse};

/// Item search response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemsResponse {
    /// The matching items, ordered by name.
    pub items: Vec<ItemResponse>,
}

/// Search Items Handler
///
/// Filters stored items by name and description substrings and exact
/// EAN; leaving every filter out lists everything.
#[endpoint(tags("items"), summary = "Search Items")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    description: QueryParam<String, false>,
    ean: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ItemsResponse>, StatusError> {
    let app = depot.obtain_or_500::<AppContext>()?;

    let query = ItemQuery {
        name: name.into_inner().unwrap_or_default(),
        description: description.into_inner().unwrap_or_default(),
        ean: ean.into_inner().unwrap_or_default(),
    };

    let items = app
        .items
        .search_items(query)
        .await
        .or_500("failed to search items")?;

    Ok(Json(ItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use till::items::ItemCategory;
    use till_app::domain::items::{
        ItemsServiceError, MockItemsService,
        records::{ItemRecord, ItemUuid},
    };

    use crate::test_helpers::items_service;

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items").get(handler))
    }

    fn belt() -> ItemRecord {
        ItemRecord {
            uuid: ItemUuid::new(),
            name: "Leather belt".to_owned(),
            ean: "7350053850019".to_owned(),
            price: dec!(25.00),
            description: "Brown leather belt".to_owned(),
            category: ItemCategory::Belt,
        }
    }

    #[tokio::test]
    async fn test_search_passes_filters_through() -> TestResult {
        let record = belt();
        let expected_uuid = record.uuid;

        let mut items = MockItemsService::new();

        items
            .expect_search_items()
            .once()
            .withf(|query| {
                *query
                    == ItemQuery {
                        name: "belt".to_owned(),
                        description: String::new(),
                        ean: "7350053850019".to_owned(),
                    }
            })
            .return_once(move |_| Ok(vec![record]));

        items.expect_save_item().never();

        let response: ItemsResponse =
            TestClient::get("http://example.com/items?name=belt&ean=7350053850019")
                .send(&make_service(items))
                .await
                .take_json()
                .await?;

        let uuids: Vec<_> = response.items.iter().map(|item| item.uuid).collect();

        assert_eq!(uuids, vec![expected_uuid.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_without_filters_lists_everything() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_search_items()
            .once()
            .withf(|query| *query == ItemQuery::default())
            .return_once(|_| Ok(vec![]));

        items.expect_save_item().never();

        let response: ItemsResponse = TestClient::get("http://example.com/items")
            .send(&make_service(items))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty(), "no items stored yet");

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() {
        let mut items = MockItemsService::new();

        items
            .expect_search_items()
            .once()
            .return_once(|_| Err(ItemsServiceError::Storage));

        items.expect_save_item().never();

        let res = TestClient::get("http://example.com/items")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
