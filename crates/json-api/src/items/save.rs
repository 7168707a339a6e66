//! Save Item Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use till::items::ItemCategory;
use till_app::{context::AppContext, domain::items::records::NewItem};

use crate::{extensions::*, items::models::ItemResponse};

/// Save Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaveItemRequest {
    /// Display name.
    pub name: String,
    /// European article number.
    pub ean: String,
    /// Unit price; must be non-negative.
    pub price: Decimal,
    /// Free-form description.
    pub description: String,
    /// Category tag.
    #[salvo(schema(value_type = String))]
    pub category: ItemCategory,
}

impl From<SaveItemRequest> for NewItem {
    fn from(request: SaveItemRequest) -> Self {
        Self {
            name: request.name,
            ean: request.ean,
            price: request.price,
            description: request.description,
            category: request.category,
        }
    }
}

/// Save Item Handler
#[endpoint(
    tags("items"),
    summary = "Save Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SaveItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, StatusError> {
    let app = depot.obtain_or_500::<AppContext>()?;
    let request = json.into_inner();

    if request.price.is_sign_negative() {
        return Err(StatusError::bad_request().brief("Item price must be non-negative"));
    }

    let record = app
        .items
        .save_item(request.into())
        .await
        .or_500("failed to store item")?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}
