use pocketlink_shortener::ShortenerError;
use pocketlink_storage::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shorten(#[from] ShortenerError),
    #[error("failed to persist links: {0}")]
    Persist(#[from] StorageError),
}

impl AppError {
    /// The single message string shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Shorten(e) => e.user_message(),
            AppError::Persist(_) => "Could not save the shortened URL. Please try again.",
        }
    }
}
