//! Recursive template file copying

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy `source` to `destination`, recursing into directories
///
/// Existing files at the destination are overwritten. Symlinks are followed,
/// so linked files and directories land as real copies; a link loop or a
/// dangling link is an error. Returns the copied files relative to `source`.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    let mut copied_files = Vec::new();

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            copy_failed(path, io::Error::from(e))
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| copy_failed(entry.path().to_path_buf(), io::Error::other(e)))?;
        // The root entry maps onto the destination itself
        let target = if relative.as_os_str().is_empty() {
            destination.to_path_buf()
        } else {
            destination.join(relative)
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_failed(target.clone(), e))?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| copy_failed(parent.to_path_buf(), e))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|e| copy_failed(entry.path().to_path_buf(), e))?;
            copied_files.push(relative.to_path_buf());
        } else {
            return Err(copy_failed(
                entry.path().to_path_buf(),
                io::Error::new(io::ErrorKind::Unsupported, "unsupported file type"),
            ));
        }
    }

    Ok(copied_files)
}

fn copy_failed(path: PathBuf, source: io::Error) -> ScaffoldError {
    ScaffoldError::CopyFailed { path, source }
}
