use thiserror::Error;

/// Errors that can occur while reading or writing the shape collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to (de)serialize shapes: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
