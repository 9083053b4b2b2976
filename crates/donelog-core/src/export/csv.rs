use crate::error::ExportError;
use crate::utils::error_helpers::{convert_csv_error, convert_io_to_export_error};
use std::path::Path;

/// A record that flattens into one CSV row under a fixed header.
pub trait CsvRecord {
    const HEADER: &'static [&'static str];

    fn to_row(&self) -> Vec<String>;
}

/// Write the header followed by one row per record.
///
/// Quoting of commas, quotes and newlines inside fields is left to the
/// `csv` writer.
pub fn write_csv<R: CsvRecord>(records: &[R], path: &Path) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| convert_csv_error(e, path))?;

    writer
        .write_record(R::HEADER)
        .map_err(|e| convert_csv_error(e, path))?;
    for record in records {
        writer
            .write_record(record.to_row())
            .map_err(|e| convert_csv_error(e, path))?;
    }
    writer
        .flush()
        .map_err(|e| convert_io_to_export_error(e, path))?;

    Ok(records.len())
}
