//! Input validation for configuration values and CLI arguments

use crate::error::CliError;
use chrono::{DateTime, FixedOffset};

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate that the range start does not come after its end
pub fn validate_date_range(start: &str, end: &str) -> crate::Result<()> {
    let start_at = parse_bound("start date", start)?;
    let end_at = parse_bound("end date", end)?;

    if start_at > end_at {
        return Err(CliError::InvalidArguments(format!(
            "Start date {} is after end date {}",
            start, end
        ))
        .into());
    }

    Ok(())
}

fn parse_bound(field: &str, value: &str) -> crate::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|e| {
        CliError::InvalidArguments(format!(
            "Invalid {} '{}': expected an RFC 3339 timestamp such as 2025-01-01T00:00:00.000Z ({})",
            field, value, e
        ))
        .into()
    })
}

/// Validate that a search query is not blank
pub fn validate_search_query(query: &str) -> crate::Result<()> {
    if query.trim().is_empty() {
        return Err(CliError::InvalidArguments("Search query cannot be empty".to_string()).into());
    }
    Ok(())
}
