use thiserror::Error;

/// Errors returned by log queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Malformed or empty input, rejected before the store is contacted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Any failure surfaced by the storage layer.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Result type for log query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
