use crate::error::{Result, ShortenerError};
use pocketlink_core::ShortCode;
use url::Url;

/// Validates that `input` is an absolute URL with a scheme and a host.
///
/// Blank input is reported as [`ShortenerError::EmptyInput`] before any
/// parsing is attempted.
pub fn validate_url(input: &str) -> Result<Url> {
    if input.trim().is_empty() {
        return Err(ShortenerError::EmptyInput);
    }

    let url = Url::parse(input).map_err(|e| ShortenerError::InvalidUrl(format!("{e}: {input}")))?;

    if url.host().is_none() {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a host: {input}"
        )));
    }

    Ok(url)
}

/// Validates a custom short code against `^[A-Za-z0-9]{3,16}$`.
pub fn validate_shortcode(code: &str) -> Result<ShortCode> {
    Ok(ShortCode::new(code)?)
}
