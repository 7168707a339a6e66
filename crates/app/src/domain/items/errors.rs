//! Items service errors.

use thiserror::Error;

/// Failures surfaced by an [`super::ItemsService`] backend.
#[derive(Debug, Error)]
pub enum ItemsServiceError {
    /// The backing store could not complete the operation.
    #[error("item storage unavailable")]
    Storage,
}
