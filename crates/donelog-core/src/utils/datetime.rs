//! Timestamp reformatting for presentation
//!
//! API timestamps arrive as RFC 3339 strings. Presenters want a fixed,
//! human-readable layout; anything that fails to parse is passed through
//! untouched rather than treated as an error.

use chrono::{DateTime, NaiveDate};

/// `2025-03-14 09:26:53`
pub const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `2025-03-14 09:26`
pub const MINUTES_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Reformat an RFC 3339 timestamp, keeping its original UTC offset.
///
/// # Examples
/// ```
/// use donelog_core::utils::datetime::{format_timestamp, SECONDS_FORMAT};
/// assert_eq!(
///     format_timestamp("2025-03-14T09:26:53.589Z", SECONDS_FORMAT),
///     "2025-03-14 09:26:53"
/// );
/// assert_eq!(format_timestamp("yesterday", SECONDS_FORMAT), "yesterday");
/// ```
pub fn format_timestamp(raw: &str, format: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format(format).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Optional variant: absence stays absence.
pub fn format_optional_timestamp(raw: Option<&str>, format: &str) -> Option<String> {
    raw.map(|value| format_timestamp(value, format))
}

/// `January 2025` for an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
pub fn month_year(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%B %Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `January 2025 - February 2026`
pub fn describe_range(start: &str, end: &str) -> String {
    format!("{} - {}", month_year(start), month_year(end))
}

/// Human range for a search string carrying a `merged:A..B` qualifier.
///
/// Falls back to the search string itself when no such qualifier exists.
pub fn describe_search_range(query: &str) -> String {
    query
        .split_whitespace()
        .find_map(|term| term.strip_prefix("merged:"))
        .and_then(|range| range.split_once(".."))
        .map(|(start, end)| describe_range(start, end))
        .unwrap_or_else(|| query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_range() {
        assert_eq!(
            describe_range("2025-01-01T00:00:00.000Z", "2026-02-28T23:59:59.999Z"),
            "January 2025 - February 2026"
        );
        assert_eq!(month_year("2025-07-04"), "July 2025");
        assert_eq!(month_year("someday"), "someday");
    }

    #[test]
    fn test_describe_search_range() {
        assert_eq!(
            describe_search_range("is:pr author:@me is:merged merged:2025-01-01..2026-02-28"),
            "January 2025 - February 2026"
        );
        assert_eq!(describe_search_range("is:pr is:merged"), "is:pr is:merged");
    }

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(
            format_timestamp("2025-06-01T14:05:09Z", SECONDS_FORMAT),
            "2025-06-01 14:05:09"
        );
        assert_eq!(
            format_timestamp("2025-06-01T14:05:09Z", MINUTES_FORMAT),
            "2025-06-01 14:05"
        );
    }

    #[test]
    fn test_format_timestamp_keeps_offset_local_time() {
        assert_eq!(
            format_timestamp("2025-06-01T23:30:00+02:00", MINUTES_FORMAT),
            "2025-06-01 23:30"
        );
    }

    #[test]
    fn test_format_timestamp_passes_through_unparseable() {
        assert_eq!(format_timestamp("", SECONDS_FORMAT), "");
        assert_eq!(format_timestamp("2025-06-01", SECONDS_FORMAT), "2025-06-01");
        assert_eq!(
            format_timestamp("not a timestamp", MINUTES_FORMAT),
            "not a timestamp"
        );
    }

    #[test]
    fn test_format_optional_timestamp() {
        assert_eq!(format_optional_timestamp(None, SECONDS_FORMAT), None);
        assert_eq!(
            format_optional_timestamp(Some("2025-01-02T03:04:05.000Z"), SECONDS_FORMAT),
            Some("2025-01-02 03:04:05".to_string())
        );
    }
}
