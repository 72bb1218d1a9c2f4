use crate::error::Result;
use std::sync::Arc;

/// A key/value blob store that persists the encoded link list.
///
/// Implementations only need whole-value reads and overwrites; there are
/// no partial updates.
pub trait Backend: Send + Sync + 'static {
    /// Reads the blob stored under `key`.
    /// Returns `Ok(None)` if nothing was ever written there.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}
