//! The Pocketlink application layer.
//!
//! [`App`] wires the store, allocator, redirector and journal together and
//! is what front-ends (such as the `pocketlink` CLI) talk to.

pub mod app;
pub mod config;
pub mod error;
pub mod telemetry;

pub use app::{App, Shortened};
pub use config::AppConfig;
pub use error::AppError;
