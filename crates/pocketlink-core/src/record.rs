use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored short link.
///
/// The serialized form uses the field names `longUrl`, `shortUrl` and
/// `expiresAt` (epoch milliseconds) so existing persisted blobs keep
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The original URL that was shortened.
    #[serde(rename = "longUrl")]
    pub long_url: String,
    /// The short code the link is reachable under.
    #[serde(rename = "shortUrl")]
    pub short_code: ShortCode,
    /// When the link stops redirecting.
    #[serde(rename = "expiresAt", with = "epoch_millis")]
    pub expires_at: Timestamp,
}

impl LinkRecord {
    pub fn new(long_url: impl Into<String>, short_code: ShortCode, expires_at: Timestamp) -> Self {
        Self {
            long_url: long_url.into(),
            short_code,
            expires_at,
        }
    }

    /// Returns `true` once `now` is strictly past the expiry timestamp.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

mod epoch_millis {
    use jiff::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(ts.as_millisecond())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        Timestamp::from_millisecond(millis).map_err(serde::de::Error::custom)
    }
}
