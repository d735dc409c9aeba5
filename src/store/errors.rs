//! Storage error types
//!
//! Two failure classes cover every backend:
//! - unavailable: the backend cannot be reached
//! - rejected: the backend refused the operation

use thiserror::Error;

/// Failure raised by a document store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend unreachable (connection refused, server selection
    /// timeout, broken pipe)
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Backend reachable but the operation was refused
    #[error("store rejected operation: {0}")]
    Rejected(String),
}

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;
