//! Short link allocation.
//!
//! This crate validates shorten requests and decides the short code and
//! expiry of each new link. See [`Allocator`].

pub mod allocator;
pub mod error;
pub mod validate;
pub mod validity;

pub use allocator::{
    Allocator, AllocatorSettings, ShortenRequest, DEFAULT_MAX_ATTEMPTS, DEFAULT_VALIDITY_MINUTES,
};
pub use error::ShortenerError;
pub use validate::{validate_shortcode, validate_url};
