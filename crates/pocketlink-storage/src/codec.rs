use crate::error::{Result, StorageError};
use crate::store::Store;
use pocketlink_core::LinkRecord;

/// Encodes the whole store as a JSON array of records, newest first.
pub fn encode(store: &Store) -> Result<Vec<u8>> {
    serde_json::to_vec(store.records()).map_err(|e| StorageError::Encode(e.to_string()))
}

/// Decodes a JSON array of records, keeping the persisted order.
pub fn decode(bytes: &[u8]) -> Result<Store> {
    let records: Vec<LinkRecord> =
        serde_json::from_slice(bytes).map_err(|e| StorageError::Decode(e.to_string()))?;
    Ok(Store::from_records(records))
}
