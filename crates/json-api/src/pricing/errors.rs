//! Price calculation errors

use salvo::http::StatusError;
use tracing::error;

use till::discounts::DiscountError;

pub(crate) fn into_status_error(error: DiscountError) -> StatusError {
    match error {
        DiscountError::InvalidPercentage(_) => {
            error!("rejected discount configuration: {error}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn no_rules_configured() -> StatusError {
    error!("price calculation produced no result: no discount rules configured");

    StatusError::internal_server_error()
}
