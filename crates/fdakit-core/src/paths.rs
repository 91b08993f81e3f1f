//! Filesystem path helpers.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from path validation and directory creation.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path exists but is not a directory.
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Directory creation failed.
    #[error("failed to create directory {path}: {reason}")]
    CreateFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error text.
        reason: String,
    },
}

/// Ensure the provided directory exists, creating it (and parents) if missing.
///
/// Idempotent: an existing directory is accepted as-is.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    Ok(())
}
