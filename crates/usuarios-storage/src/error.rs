//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No record with the given identifier exists in the store.
    ///
    /// This is the not-found signal: callers decide how to surface it,
    /// it carries no transport semantics of its own.
    #[error("user not found: {id}")]
    UserNotFound { id: u64 },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
