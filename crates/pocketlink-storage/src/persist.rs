use crate::backend::Backend;
use crate::codec;
use crate::error::Result;
use crate::store::Store;
use tracing::{debug, warn};

/// The key the encoded link list lives under.
pub const STORE_KEY: &str = "shortened-urls";

/// Loads the store from `backend`.
///
/// Never fails: a missing blob, a backend read error or a blob that does
/// not decode all yield an empty store.
pub fn load<B: Backend + ?Sized>(backend: &B) -> Store {
    let bytes = match backend.read(STORE_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(key = STORE_KEY, "no persisted links, starting empty");
            return Store::new();
        }
        Err(e) => {
            warn!(key = STORE_KEY, error = %e, "failed to read persisted links, starting empty");
            return Store::new();
        }
    };

    match codec::decode(&bytes) {
        Ok(store) => {
            debug!(key = STORE_KEY, records = store.len(), "loaded persisted links");
            store
        }
        Err(e) => {
            warn!(key = STORE_KEY, error = %e, "persisted links are malformed, starting empty");
            Store::new()
        }
    }
}

/// Overwrites the persisted blob with the full contents of `store`.
pub fn save<B: Backend + ?Sized>(backend: &B, store: &Store) -> Result<()> {
    let bytes = codec::encode(store)?;
    backend.write(STORE_KEY, &bytes)?;
    debug!(key = STORE_KEY, records = store.len(), "persisted links");
    Ok(())
}
