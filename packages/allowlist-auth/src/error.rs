//! Error types for allow-list authentication.

use thiserror::Error;

/// Result type for operations that can fail unexpectedly.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Failure while fetching or parsing the allow-list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resource could not be fetched (I/O, connection, non-2xx status)
    #[error("Failed to fetch allow-list: {0}")]
    Transport(String),

    /// The resource was fetched but is not valid CSV
    #[error("Failed to parse allow-list: {0}")]
    Parse(#[from] csv::Error),
}

/// Failure reading or writing durable key-value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage backend is missing or refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The stored identity could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Unexpected failures surfaced by [`AuthFacade::login`](crate::AuthFacade::login).
///
/// Expected outcomes such as an unlisted email are not errors; they come back
/// as [`LoginOutcome::Rejected`](crate::LoginOutcome::Rejected).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    AllowList(#[from] StoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
