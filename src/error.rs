//! Error types surfaced by the library.
//!
//! Only an invalid root is reported to callers. Everything that goes wrong
//! below the root (permission denied, vanished entries, broken links) is
//! absorbed by the scanner and never becomes an error.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while preparing a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested root does not exist (or cannot be resolved).
    #[error("path does not exist or is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The requested root exists but is not a directory.
    #[error("path does not exist or is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ScanError {
    /// Process exit code used when a scan cannot start.
    pub const EXIT_CODE: i32 = 2;

    /// The offending path, as resolved before validation failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootNotFound(path) | Self::NotADirectory(path) => path.as_path(),
        }
    }
}
