use jiff::Timestamp;
use pocketlink_core::LinkRecord;
use pocketlink_storage::Store;

/// The outcome of looking up a visited short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No record uses the code.
    NotFound,
    /// The record exists but its expiry has passed.
    Expired(LinkRecord),
    /// The record exists and the caller should redirect to its long URL.
    Active(LinkRecord),
}

impl Resolution {
    /// The record behind an active or expired resolution.
    pub fn record(&self) -> Option<&LinkRecord> {
        match self {
            Resolution::NotFound => None,
            Resolution::Expired(record) | Resolution::Active(record) => Some(record),
        }
    }

    /// The message shown instead of redirecting, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Resolution::NotFound => Some("Short URL not found."),
            Resolution::Expired(_) => Some("This short URL has expired."),
            Resolution::Active(_) => None,
        }
    }

    /// The URL to redirect to, if the link is active.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Resolution::Active(record) => Some(&record.long_url),
            _ => None,
        }
    }
}

/// Extracts the short code from a visit path such as `/abc123`.
///
/// Exactly one leading `/` is removed; a bare code is accepted as-is.
/// Returns `None` for the root path.
pub fn code_from_path(path: &str) -> Option<&str> {
    let code = path.strip_prefix('/').unwrap_or(path);
    (!code.is_empty()).then_some(code)
}

/// Classifies a visit to `path` against `store` at time `now`.
///
/// The lookup is an exact, case-sensitive match on the first record with
/// that code. A record is expired once `now` is strictly past its expiry.
pub fn resolve(path: &str, store: &Store, now: Timestamp) -> Resolution {
    let Some(record) = code_from_path(path).and_then(|code| store.find(code)) else {
        return Resolution::NotFound;
    };

    if record.is_expired_at(now) {
        Resolution::Expired(record.clone())
    } else {
        Resolution::Active(record.clone())
    }
}
