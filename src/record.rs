//! Per-file metadata collected during a scan.
//!
//! Records are built by the scanner from a successful `stat` of each file.

use std::path::{Path, PathBuf};

/// Metadata for a single regular file discovered during traversal.
///
/// Records are immutable once created; the scanner produces exactly one per
/// file that could be stat'ed successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the file, rooted at the scanned directory
    pub path: PathBuf,

    /// File size in bytes
    pub size_bytes: u64,

    /// Lowercased extension including the leading dot (`".rs"`), or empty
    pub extension: String,
}

impl FileRecord {
    /// Build a record from a known size, deriving the extension from `path`.
    #[must_use]
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        let extension = extension_of(&path);
        Self {
            path,
            size_bytes,
            extension,
        }
    }
}

/// Lowercased extension of the final path component, with its leading dot.
///
/// Dot-files such as `.bashrc` and names ending in a bare dot have no
/// extension and yield an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}
