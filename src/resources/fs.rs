//! File-system resource helpers.
use std::path::Path;

use crate::error::{FleekError, Result};

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| FleekError::io("creating directory", parent, e))?;
    }
    Ok(())
}

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<()> {
    if path.exists() || path.symlink_metadata().is_ok() {
        std::fs::remove_file(path).map_err(|e| FleekError::io("removing", path, e))?;
    }
    Ok(())
}

/// Write `contents` to `path`, truncating any existing file.
///
/// When `path` is a symlink the link is followed and its target rewritten.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| FleekError::io("writing", path, e))
}
