//! Normalization helpers shared across adapters.

/// Extends a calendar-date-only value to the full timestamp layout the
/// schema requires, assuming midnight UTC.
///
/// Values that already carry a time component pass through untouched; a
/// malformed date still gets the suffix and is left for the validator to
/// reject.
pub fn extend_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains(' ') {
        trimmed.to_string()
    } else {
        format!("{trimmed} 00:00:00+00:00")
    }
}

/// Formats a normalized score the way the output CSV expects.
///
/// Whole numbers keep one decimal place (`8.0`), fractional scores print
/// as-is (`8.5`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extends_calendar_dates() {
        assert_eq!(extend_date("2023-01-16"), "2023-01-16 00:00:00+00:00");
        assert_eq!(
            extend_date("2023-01-16 03:56:13+00:00"),
            "2023-01-16 03:56:13+00:00"
        );
    }

    #[test]
    fn formats_scores() {
        assert_eq!(format_score(8.0), "8.0");
        assert_eq!(format_score(10.0), "10.0");
        assert_eq!(format_score(8.5), "8.5");
    }
}
