use crate::error::{Result, ShortenerError};
use crate::validate::{validate_shortcode, validate_url};
use crate::validity::{expiry_after, resolve_validity_minutes};
use pocketlink_core::{Clock, LinkRecord, ShortCode};
use pocketlink_generator::Generator;
use pocketlink_storage::Store;
use tracing::{debug, info, trace};
use typed_builder::TypedBuilder;

pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1024;

/// Tunables for an [`Allocator`].
///
/// Non-positive values fall back to [`DEFAULT_VALIDITY_MINUTES`] and
/// [`DEFAULT_MAX_ATTEMPTS`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct AllocatorSettings {
    /// Validity used when the request gives none, or a non-positive one.
    #[builder(default = DEFAULT_VALIDITY_MINUTES)]
    pub default_validity_minutes: i64,
    /// How many generated candidates may collide before giving up.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl AllocatorSettings {
    /// The validity applied to requests that carry no usable one.
    pub fn fallback_validity_minutes(&self) -> i64 {
        if self.default_validity_minutes > 0 {
            self.default_validity_minutes
        } else {
            DEFAULT_VALIDITY_MINUTES
        }
    }

    /// The number of candidates drawn before generation gives up.
    pub fn attempt_limit(&self) -> u32 {
        if self.max_attempts > 0 {
            self.max_attempts
        } else {
            DEFAULT_MAX_ATTEMPTS
        }
    }
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A request to shorten a URL, carrying the raw form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenRequest {
    /// The URL to shorten, stored exactly as given.
    pub long_url: String,
    /// Optional custom short code; surrounding whitespace is ignored and a
    /// blank value means "generate one".
    pub custom_code: Option<String>,
    /// Optional validity in minutes, as typed.
    pub validity_minutes: Option<String>,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Default::default()
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    pub fn with_validity(mut self, minutes: impl Into<String>) -> Self {
        self.validity_minutes = Some(minutes.into());
        self
    }

    fn custom_code(&self) -> Option<&str> {
        self.custom_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Decides the short code and expiry for a new link.
///
/// The allocator reads a store snapshot but never changes it: inserting the
/// returned record and persisting the result is the caller's job.
#[derive(Debug, Clone)]
pub struct Allocator<G, C> {
    generator: G,
    clock: C,
    settings: AllocatorSettings,
}

impl<G: Generator, C: Clock> Allocator<G, C> {
    pub fn new(generator: G, clock: C, settings: AllocatorSettings) -> Self {
        Self {
            generator,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &AllocatorSettings {
        &self.settings
    }

    /// Builds a new record for `request` against the codes in `store`.
    pub fn allocate(&self, request: &ShortenRequest, store: &Store) -> Result<LinkRecord> {
        trace!(long_url = %request.long_url, custom_code = ?request.custom_code, "allocating short link");

        match self.try_allocate(request, store) {
            Ok(record) => {
                info!(
                    code = %record.short_code,
                    long_url = %record.long_url,
                    expires_at = %record.expires_at,
                    "allocated short link"
                );
                Ok(record)
            }
            Err(e) => {
                debug!(long_url = %request.long_url, error = %e, "rejected short link request");
                Err(e)
            }
        }
    }

    fn try_allocate(&self, request: &ShortenRequest, store: &Store) -> Result<LinkRecord> {
        validate_url(&request.long_url)?;

        let short_code = match request.custom_code() {
            Some(code) => {
                let code = validate_shortcode(code)?;
                if store.contains(code.as_str()) {
                    return Err(ShortenerError::CodeInUse(code.to_string()));
                }
                code
            }
            None => self.generate_unique(store)?,
        };

        let minutes = resolve_validity_minutes(
            request.validity_minutes.as_deref(),
            self.settings.fallback_validity_minutes(),
        );
        let expires_at = expiry_after(self.clock.now(), minutes)?;

        Ok(LinkRecord::new(
            request.long_url.clone(),
            short_code,
            expires_at,
        ))
    }

    /// Draws candidates until one is free, up to `max_attempts` times.
    fn generate_unique(&self, store: &Store) -> Result<ShortCode> {
        let taken = store.codes();
        let limit = self.settings.attempt_limit();

        for attempt in 1..=limit {
            let candidate: ShortCode = self.generator.generate().into();
            if !taken.contains(candidate.as_str()) {
                return Ok(candidate);
            }
            debug!(code = %candidate, attempt, "generated short code collides, retrying");
        }

        Err(ShortenerError::CodeSpaceExhausted { attempts: limit })
    }
}
