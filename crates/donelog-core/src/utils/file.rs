//! Output directory handling for exported files

use crate::error::StorageError;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> crate::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
    }
    Ok(())
}
