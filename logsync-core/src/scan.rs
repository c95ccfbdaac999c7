use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::error::SyncError;

/// Recursively lists every regular file under `root`, relative to `root`.
///
/// Order is whatever the filesystem yields. Any traversal error, including
/// a missing or non-directory root, fails the whole scan.
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>, SyncError> {
    info!(log_directory = %root.display(), "Scanning log directory");

    let unreadable = |source: std::io::Error| {
        error!(log_directory = %root.display(), error = %source, "Log directory is unreadable");
        SyncError::DirectoryUnreadable {
            path: root.to_path_buf(),
            source,
        }
    };

    let metadata = std::fs::metadata(root).map_err(unreadable)?;
    if !metadata.is_dir() {
        return Err(unreadable(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| unreadable(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        debug!(path = %relative.display(), "Found file");
        files.push(relative.to_path_buf());
    }

    info!(files = files.len(), "Scan complete");
    Ok(files)
}
