use crate::resolver::{resolve, Resolution};
use pocketlink_core::Clock;
use pocketlink_storage::Store;
use tracing::{debug, trace};

/// Service for handling visits to short links.
///
/// Reads a store snapshot and classifies the visit using its clock.
/// Performing the redirect is left to the caller.
#[derive(Debug, Clone)]
pub struct RedirectorService<C> {
    clock: C,
}

impl<C: Clock> RedirectorService<C> {
    /// Creates a new RedirectorService with the given clock.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Resolves a visit path such as `/abc123`.
    ///
    /// # Returns
    ///
    /// * `Resolution::Active(record)` - redirect to `record.long_url`
    /// * `Resolution::Expired(record)` - the link exists but has expired
    /// * `Resolution::NotFound` - no link uses the code
    pub fn resolve(&self, path: &str, store: &Store) -> Resolution {
        trace!(path, "resolving visit");

        let resolution = resolve(path, store, self.clock.now());
        match &resolution {
            Resolution::Active(record) => {
                debug!(code = %record.short_code, url = %record.long_url, "resolved short code");
            }
            Resolution::Expired(record) => {
                debug!(code = %record.short_code, expires_at = %record.expires_at, "record has expired");
            }
            Resolution::NotFound => {
                trace!(path, "short code not found");
            }
        }
        resolution
    }
}
