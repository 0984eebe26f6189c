//! Corpus enumeration and document reading.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;

/// List the regular, non-hidden files directly inside `dir`.
///
/// Entries whose name starts with `.` are skipped, as are directories and
/// anything that is not a regular file after following symlinks. The order
/// is whatever the filesystem returns unless `sort` is set, in which case
/// the paths are sorted by file name.
pub fn list_files<P: AsRef<Path>>(dir: P, sort: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.as_ref().display());
                continue;
            }
        };

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }

    if sort {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(files)
}

/// Read a document as text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the
/// whole document.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
