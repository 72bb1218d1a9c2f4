use crate::error::{Result, ShortenerError};
use jiff::{SignedDuration, Timestamp};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and a single sign are accepted, and anything after
/// the digits is ignored, so `" 15min"` is 15 and `"2.5"` is 2. Returns
/// `None` when no digits lead the input. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Resolves the requested validity in minutes.
///
/// Absent, non-numeric, zero or negative input falls back to `default`.
pub fn resolve_validity_minutes(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_leading_int)
        .filter(|minutes| *minutes > 0)
        .unwrap_or(default)
}

/// Computes `now + minutes`.
pub fn expiry_after(now: Timestamp, minutes: i64) -> Result<Timestamp> {
    let out_of_range = || ShortenerError::ValidityOutOfRange { minutes };

    let millis = minutes.checked_mul(MILLIS_PER_MINUTE).ok_or_else(out_of_range)?;
    now.checked_add(SignedDuration::from_millis(millis))
        .map_err(|_| out_of_range())
}
