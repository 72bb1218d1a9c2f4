//! Core types and traits for the Pocketlink URL shortener.
//!
//! This crate provides shared types used by the storage, shortener and
//! redirector crates: the validated [`ShortCode`], the stored
//! [`LinkRecord`], the injectable [`Clock`] and the [`Journal`] observer.

pub mod clock;
pub mod error;
pub mod journal;
pub mod record;
pub mod shortcode;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CoreError;
pub use journal::{Journal, JournalEntry, MemoryJournal, TracingJournal};
pub use record::LinkRecord;
pub use shortcode::ShortCode;
