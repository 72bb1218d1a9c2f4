use crate::config::AppConfig;
use crate::error::{AppError, Result};
use parking_lot::Mutex;
use pocketlink_core::{Clock, Journal, LinkRecord, ShortCode};
use pocketlink_generator::Generator;
use pocketlink_redirector::{RedirectorService, Resolution};
use pocketlink_shortener::{Allocator, ShortenRequest, ShortenerError};
use pocketlink_storage::{load, save, Backend, Store};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub record: LinkRecord,
    /// The full short URL, e.g. `http://localhost:3000/abc123`.
    pub short_url: String,
}

/// The lifecycle-scoped owner of the link store.
///
/// The store is loaded once from the backend when the app is opened. Every
/// successful [`App::shorten`] allocates against the current store, persists
/// the extended list and only then commits it in memory. All of this
/// happens under one lock, so callers sharing an `App` cannot claim the
/// same short code twice.
pub struct App<B, G, C> {
    backend: B,
    store: Mutex<Store>,
    allocator: Allocator<G, C>,
    redirector: RedirectorService<C>,
    clock: C,
    journal: Arc<dyn Journal>,
    base_url: String,
}

impl<B: Backend, G: Generator, C: Clock + Clone> App<B, G, C> {
    /// Loads the persisted store from `backend` and builds the app around it.
    pub fn open(
        backend: B,
        generator: G,
        clock: C,
        journal: Arc<dyn Journal>,
        config: AppConfig,
    ) -> Self {
        let store = load(&backend);
        info!(records = store.len(), base_url = %config.base_url, "opened link store");
        journal.record("Shortened list updated", list_payload(&store));

        Self {
            backend,
            store: Mutex::new(store),
            allocator: Allocator::new(generator, clock.clone(), config.allocator),
            redirector: RedirectorService::new(clock.clone()),
            clock,
            journal,
            base_url: config.base_url,
        }
    }

    /// Creates a short link for `request` and persists the updated list.
    pub fn shorten(&self, request: &ShortenRequest) -> Result<Shortened> {
        let mut store = self.store.lock();

        let record = match self.allocator.allocate(request, &store) {
            Ok(record) => record,
            Err(e) => {
                self.journal_rejection(request, &e);
                return Err(e.into());
            }
        };

        let next = store.insert(record.clone());
        if let Err(e) = save(&self.backend, &next) {
            warn!(code = %record.short_code, error = %e, "failed to persist links");
            self.journal.record(
                "Error: failed to persist shortened list",
                Some(json!({ "error": e.to_string() })),
            );
            return Err(AppError::Persist(e));
        }
        *store = next;

        self.journal.record(
            "Short URL created",
            Some(json!({
                "longUrl": record.long_url,
                "code": record.short_code.as_str(),
                "expiresAt": record.expires_at.as_millisecond(),
            })),
        );
        self.journal
            .record("Shortened list updated", list_payload(&store));

        Ok(Shortened {
            short_url: self.short_url(&record.short_code),
            record,
        })
    }

    /// Resolves a visit to `path`, e.g. `/abc123`.
    ///
    /// The caller performs the redirect for [`Resolution::Active`].
    pub fn visit(&self, path: &str) -> Resolution {
        let resolution = {
            let store = self.store.lock();
            self.redirector.resolve(path, &store)
        };

        match &resolution {
            Resolution::Expired(record) => self
                .journal
                .record("Short URL expired", serde_json::to_value(record).ok()),
            Resolution::Active(record) => self
                .journal
                .record("Redirecting to long URL", Some(json!(record.long_url))),
            Resolution::NotFound => {}
        }

        resolution
    }

    /// A snapshot of all links, newest first.
    pub fn links(&self) -> Store {
        self.store.lock().clone()
    }

    /// Whether `record` has expired by the app's clock.
    pub fn is_expired(&self, record: &LinkRecord) -> bool {
        record.is_expired_at(self.clock.now())
    }

    pub fn short_url(&self, code: &ShortCode) -> String {
        code.to_url(&self.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn journal_rejection(&self, request: &ShortenRequest, error: &ShortenerError) {
        let custom_code = request.custom_code.as_deref().map(str::trim);
        match error {
            ShortenerError::EmptyInput => self.journal.record("Error: empty URL input", None),
            ShortenerError::InvalidUrl(_) => self.journal.record(
                "Error: invalid URL format",
                Some(json!(request.long_url)),
            ),
            ShortenerError::InvalidShortcode(_) => self
                .journal
                .record("Error: invalid shortcode", Some(json!(custom_code))),
            ShortenerError::CodeInUse(code) => self
                .journal
                .record("Error: shortcode not unique", Some(json!(code))),
            other => self.journal.record(
                "Error: short URL not created",
                Some(json!({ "error": other.to_string() })),
            ),
        }
    }
}

/// The whole link list in its persisted form.
fn list_payload(store: &Store) -> Option<Value> {
    serde_json::to_value(store.records()).ok()
}
