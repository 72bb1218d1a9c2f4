use thiserror::Error;

/// Errors returned when building a generator from invalid settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid code length {length}; expected {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },
    #[error("alphabet is empty")]
    EmptyAlphabet,
    #[error("alphabet contains non-alphanumeric byte {byte:#04x}")]
    InvalidAlphabet { byte: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
