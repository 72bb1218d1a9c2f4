use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode records: {0}")]
    Encode(String),
    #[error("stored data is invalid: {0}")]
    Decode(String),
}
