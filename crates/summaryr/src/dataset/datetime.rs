//! Date and timestamp parsing for text cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format used when displaying instants.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Shapes a value must have before the format list is tried.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{4}-\d{2}-\d{2}", // ISO date
        r"^\d{2}/\d{2}/\d{4}", // US date
        r"^\d{2}-\d{2}-\d{4}", // European date
        r"^\d{4}/\d{2}/\d{2}", // Alt ISO
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Returns true if a value has the shape of a date.
pub fn looks_like_date(value: &str) -> bool {
    DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value))
}

/// Parse a date or timestamp. Dates without a time component map to midnight.
///
/// RFC 3339 values with an offset are converted to UTC.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if !looks_like_date(value) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format an instant for display.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let dt = parse_datetime("2023-03-15").unwrap();
        assert_eq!(format_datetime(&dt), "2023-03-15 00:00:00");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_datetime("2023-03-15T10:30:00").is_some());
        assert!(parse_datetime("2023-03-15 10:30:00.250").is_some());
        assert!(parse_datetime("03/15/2023").is_some());
        let utc = parse_datetime("2023-03-15T10:30:00+02:00").unwrap();
        assert_eq!(format_datetime(&utc), "2023-03-15 08:30:00");
    }

    #[test]
    fn test_rejects_non_dates() {
        assert!(parse_datetime("hello").is_none());
        assert!(parse_datetime("12").is_none());
        assert!(parse_datetime("2023-13-45").is_none());
    }
}
