//! Visit resolution for short links.
//!
//! [`resolve`] classifies a visit path against a [`Store`] snapshot as
//! active, expired or unknown. [`RedirectorService`] pairs it with a clock
//! and logging.
//!
//! ```rust
//! use jiff::Timestamp;
//! use pocketlink_core::{LinkRecord, ShortCode};
//! use pocketlink_redirector::{resolve, Resolution};
//! use pocketlink_storage::Store;
//!
//! let now = Timestamp::now();
//! let store = Store::new().insert(LinkRecord::new(
//!     "https://example.com",
//!     ShortCode::new("abc123").unwrap(),
//!     now + jiff::SignedDuration::from_mins(30),
//! ));
//!
//! match resolve("/abc123", &store, now) {
//!     Resolution::Active(record) => println!("Redirect to: {}", record.long_url),
//!     Resolution::Expired(_) => println!("This short URL has expired."),
//!     Resolution::NotFound => println!("Not found"),
//! }
//! ```
//!
//! [`Store`]: pocketlink_storage::Store

pub mod resolver;
pub mod service;

pub use resolver::{code_from_path, resolve, Resolution};
pub use service::RedirectorService;
