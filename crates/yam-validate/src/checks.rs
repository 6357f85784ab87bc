//! Field-level checks used by the row validator.

use chrono::DateTime;

/// Exact timestamp layout required by the YamTrack CSV format:
/// `YYYY-MM-DD HH:MM:SS±HH:MM`.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Presence predicate: the value exists and is non-empty after trimming.
///
/// A missing key (`None`) and an empty-string placeholder are both absent;
/// whitespace-only values count as absent too.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Decimal score between 0 and 10 inclusive.
pub fn is_decimal_score(value: &str) -> bool {
    match value.trim().parse::<f64>() {
        Ok(score) => (0.0..=10.0).contains(&score),
        Err(_) => false,
    }
}

/// Integer check for progress.
pub fn is_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// Validates an ISO-8601 timestamp with UTC offset under the exact format.
pub fn is_iso_timestamp(value: &str) -> bool {
    DateTime::parse_from_str(value.trim(), ISO_TIMESTAMP_FORMAT).is_ok()
}
