use pocketlink_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("url is empty")]
    EmptyInput,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortcode(String),
    #[error("short code already in use: {0}")]
    CodeInUse(String),
    #[error("no free short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },
    #[error("validity of {minutes} minutes is out of range")]
    ValidityOutOfRange { minutes: i64 },
}

impl ShortenerError {
    /// The message shown to the person filling in the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter a URL.",
            Self::InvalidUrl(_) => {
                "Invalid URL format. Please enter a valid URL including http(s)://"
            }
            Self::InvalidShortcode(_) => "Shortcode must be 3-16 alphanumeric characters.",
            Self::CodeInUse(_) => "Shortcode already in use. Please choose another.",
            Self::CodeSpaceExhausted { .. } => {
                "Could not generate a free shortcode. Please choose a custom one."
            }
            Self::ValidityOutOfRange { .. } => "Validity is too long.",
        }
    }
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortcode(message),
        }
    }
}
