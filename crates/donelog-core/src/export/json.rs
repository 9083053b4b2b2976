use crate::error::ExportError;
use crate::utils::error_helpers::convert_io_to_export_error;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write records as a pretty-printed JSON array (two-space indent).
pub fn write_json<R: Serialize>(records: &[R], path: &Path) -> Result<usize, ExportError> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content).map_err(|e| convert_io_to_export_error(e, path))?;
    Ok(records.len())
}
