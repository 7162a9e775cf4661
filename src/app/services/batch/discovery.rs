//! Region file discovery
//!
//! Region files live one-per-region in a flat directory, conventionally
//! named `<id>-<Name>.txt`. Discovery walks the directory recursively so
//! mods that sort regions into subfolders still load, filters on the
//! extension, and sorts the result for deterministic batch order.

use crate::constants::REGION_FILE_EXTENSION;
use crate::error::{LoadError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Find every region script file under a directory, sorted by path
pub fn discover_region_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(io) => LoadError::io(path, io),
                None => LoadError::worker("directory walk hit a filesystem loop"),
            }
        })?;

        if entry.file_type().is_file() && is_region_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("Discovered {} region files in {}", files.len(), dir.display());
    Ok(files)
}

fn is_region_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(REGION_FILE_EXTENSION))
}
