use std::fs;
use std::path::Path;

use crate::utils::error::{BoxResult, ConversioError};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| {
        ConversioError::File(format!("Failed to read {}: {}", path.as_ref().display(), e)).into()
    })
}

/// Write a string to a file, creating parent directories first
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    fs::write(path.as_ref(), contents).map_err(|e| {
        ConversioError::File(format!("Failed to write {}: {}", path.as_ref().display(), e))
    })?;
    Ok(())
}
