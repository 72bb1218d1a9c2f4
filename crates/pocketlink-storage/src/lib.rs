//! The mapping store and its persistence.
//!
//! [`Store`] is the in-memory list of short links. [`load`] and [`save`]
//! move it to and from a [`Backend`] as a single JSON blob.

pub mod backend;
pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod persist;
pub mod store;

pub use backend::Backend;
pub use error::{Result, StorageError};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
pub use persist::{load, save, STORE_KEY};
pub use store::Store;
