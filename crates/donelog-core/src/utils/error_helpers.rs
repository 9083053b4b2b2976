use crate::error::{ApiError, ExportError};
use std::io;
use std::path::Path;

/// Helper functions for standardizing error conversions across the codebase
/// Convert reqwest errors to ApiError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str, timeout_secs: u64) -> ApiError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, timeout_secs);
    }

    ApiError::Transport {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> ApiError {
    ApiError::Timeout {
        timeout_secs,
        endpoint: endpoint.to_string(),
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_schema_error(error: serde_json::Error, endpoint: &str) -> ApiError {
    ApiError::Schema {
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", error),
    }
}

/// Convert IO errors to ExportError for file writes
pub fn convert_io_to_export_error(error: io::Error, path: &Path) -> ExportError {
    ExportError::Write {
        path: path.to_string_lossy().to_string(),
        source: error,
    }
}

/// Convert csv writer errors to ExportError
pub fn convert_csv_error(error: csv::Error, path: &Path) -> ExportError {
    ExportError::Csv {
        path: path.to_string_lossy().to_string(),
        message: error.to_string(),
    }
}
