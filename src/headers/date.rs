//! Epoch-millisecond and HTTP-date conversions.
//!
//! HTTP dates carry whole seconds only, so formatting drops the millisecond
//! part of an instant.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Largest instant an HTTP-date can express (9999-12-31T23:59:59Z).
const MAX_HTTP_DATE_MILLIS: i64 = 253_402_300_799_999;

/// Milliseconds since the Unix epoch; negative before it.
pub fn to_epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
        Err(e) => -i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX),
    }
}

/// Inverse of [`to_epoch_millis`].
pub fn from_epoch_millis(millis: i64) -> SystemTime {
    if millis >= 0 {
        UNIX_EPOCH + Duration::from_millis(millis.unsigned_abs())
    } else {
        UNIX_EPOCH - Duration::from_millis(millis.unsigned_abs())
    }
}

/// Format epoch millis as an IMF-fixdate, or `None` when the instant is
/// outside the range an HTTP-date can represent.
pub fn format_http_date(millis: i64) -> Option<String> {
    if !(0..=MAX_HTTP_DATE_MILLIS).contains(&millis) {
        return None;
    }
    Some(httpdate::fmt_http_date(from_epoch_millis(millis)))
}

/// Parse any of the three HTTP-date formats (IMF-fixdate, RFC 850, asctime).
pub fn parse_http_date(value: &str) -> Option<i64> {
    httpdate::parse_http_date(value.trim())
        .ok()
        .map(to_epoch_millis)
}
