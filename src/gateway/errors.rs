//! Gateway error types

use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StorageError;

/// Failure raised by a gateway operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The input violated the resource schema. Carries every failure
    /// found, in field declaration order.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// The document store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
