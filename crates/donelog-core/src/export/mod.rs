//! File presenters
//!
//! Each format is written independently: a failure in one is reported in
//! its outcome and never stops the next.

pub mod csv;
pub mod json;

use crate::error::ExportError;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use self::csv::{CsvRecord, write_csv};
pub use self::json::write_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub const ALL: &'static [ExportFormat] = &[ExportFormat::Json, ExportFormat::Csv];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub path: PathBuf,
    /// Number of records written.
    pub result: Result<usize, ExportError>,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Write `records` to `<output_dir>/<file_stem>.<ext>` for every format.
pub fn export_all<R>(
    records: &[R],
    output_dir: &Path,
    file_stem: &str,
    formats: &[ExportFormat],
) -> Vec<ExportOutcome>
where
    R: Serialize + CsvRecord,
{
    formats
        .iter()
        .map(|&format| {
            let path = output_dir.join(format!("{}.{}", file_stem, format.extension()));
            let result = match format {
                ExportFormat::Json => write_json(records, &path),
                ExportFormat::Csv => write_csv(records, &path),
            };

            match &result {
                Ok(count) => log::debug!("Wrote {} records to {}", count, path.display()),
                Err(e) => log::warn!("{} export to {} failed: {}", format.label(), path.display(), e),
            }

            ExportOutcome {
                format,
                path,
                result,
            }
        })
        .collect()
}
