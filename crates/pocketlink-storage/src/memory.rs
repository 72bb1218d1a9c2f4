use crate::backend::Backend;
use crate::error::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory implementation of the [`Backend`] trait.
///
/// Nothing outlives the process; useful for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBackend {
    /// Creates a new, empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with one blob.
    pub fn with_blob(key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        backend.blobs.lock().insert(key.into(), bytes.into());
        backend
    }
}

impl Backend for InMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.blobs.lock().insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }
}
