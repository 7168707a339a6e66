//! Calculate Price Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use till::items::{Item, ItemCategory};
use till_app::context::AppContext;

use crate::{
    extensions::*,
    pricing::errors::{into_status_error, no_rules_configured},
};

/// A priced line item in the calculation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemPayload {
    /// Unit price; must be non-negative.
    pub price: Decimal,
    /// Category tag.
    #[salvo(schema(value_type = String))]
    pub category: ItemCategory,
}

/// Price Calculation Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceCalculationRequest {
    /// The basket to price.
    pub items: Vec<ItemPayload>,
    /// Discount code; a missing code means none was supplied.
    #[serde(default)]
    pub code: String,
}

/// Price Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceResponse {
    /// Final basket price, rounded to two decimal places.
    pub price: Decimal,
}

/// Calculate Price Handler
#[endpoint(
    tags("price"),
    summary = "Calculate Basket Price",
    responses(
        (status_code = StatusCode::OK, description = "Price calculated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PriceCalculationRequest>,
    depot: &mut Depot,
) -> Result<Json<PriceResponse>, StatusError> {
    let app = depot.obtain_or_500::<AppContext>()?;
    let request = json.into_inner();

    if request.items.iter().any(|item| item.price.is_sign_negative()) {
        return Err(StatusError::bad_request().brief("Item prices must be non-negative"));
    }

    let items: Vec<Item> = request
        .items
        .into_iter()
        .map(|item| Item::new(item.price, item.category))
        .collect();

    let price = app
        .pricing
        .calculate(&items, &request.code)
        .map_err(into_status_error)?
        .ok_or_else(no_rules_configured)?;

    Ok(Json(PriceResponse { price }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use till::calculator::PriceCalculator;

    use crate::test_helpers::{pricing_service, strict_items_mock};

    use super::*;

    fn make_service() -> Service {
        pricing_service(
            Router::with_path("price").push(Router::with_path("calculate").post(handler)),
        )
    }

    async fn calculated_price(service: &Service, body: serde_json::Value) -> TestResult<Decimal> {
        let response: PriceResponse = TestClient::post("http://example.com/price/calculate")
            .json(&body)
            .send(service)
            .await
            .take_json()
            .await?;

        Ok(response.price)
    }

    #[tokio::test]
    async fn test_matching_code_discounts_basket() -> TestResult {
        let service = make_service();

        let price = calculated_price(
            &service,
            json!({
                "items": [{ "price": "50", "category": "SHIRT" }],
                "code": "SPECIAL_CODE_15",
            }),
        )
        .await?;

        assert_eq!(price, dec!(40.00));

        Ok(())
    }

    #[tokio::test]
    async fn test_category_discount_applies_despite_wrong_code() -> TestResult {
        let service = make_service();

        let price = calculated_price(
            &service,
            json!({
                "items": [{ "price": "50", "category": "BELT" }],
                "code": "WRONG_CODE",
            }),
        )
        .await?;

        assert_eq!(price, dec!(45.00));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_code_field_means_no_code() -> TestResult {
        let service = make_service();

        let price = calculated_price(
            &service,
            json!({ "items": [{ "price": "50", "category": "SOCKS" }] }),
        )
        .await?;

        assert_eq!(price, dec!(50.00));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_basket_prices_at_zero() -> TestResult {
        let service = make_service();

        let price = calculated_price(&service, json!({ "items": [], "code": "" })).await?;

        assert_eq!(price, dec!(0.00));

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_price_returns_400() {
        let service = make_service();

        let res = TestClient::post("http://example.com/price/calculate")
            .json(&json!({
                "items": [{ "price": "-1", "category": "SHIRT" }],
                "code": "",
            }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_unknown_category_returns_400() {
        let service = make_service();

        let res = TestClient::post("http://example.com/price/calculate")
            .json(&json!({
                "items": [{ "price": "50", "category": "HAT" }],
                "code": "",
            }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_empty_rule_set_returns_500() {
        let app = AppContext::new(
            PriceCalculator::from_rules(Vec::new()),
            Arc::new(strict_items_mock()),
        );
        let service = Service::new(
            Router::new().hoop(salvo::affix_state::inject(app)).push(
                Router::with_path("price").push(Router::with_path("calculate").post(handler)),
            ),
        );

        let res = TestClient::post("http://example.com/price/calculate")
            .json(&json!({ "items": [{ "price": "50", "category": "SHIRT" }], "code": "" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_pricing_never_touches_item_storage() -> TestResult {
        // pricing_service injects an items mock that rejects every call;
        // pricing a basket must not trigger one.
        let service = make_service();

        let price = calculated_price(
            &service,
            json!({ "items": [{ "price": "50", "category": "BELT" }], "code": "" }),
        )
        .await?;

        assert_eq!(price, dec!(45.00));

        Ok(())
    }
}
