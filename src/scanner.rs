//! Directory traversal and metadata collection.
//!
//! This module walks a directory tree and turns every reachable regular file
//! into a [`FileRecord`]. Traversal is iterative (walkdir keeps an explicit
//! stack of open directories), lazy, and best-effort: entries that vanish or
//! cannot be read are skipped and logged, never reported as errors.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::{config::ScanOptions, error::ScanError, record::FileRecord};

/// Leading character that marks a file or directory as hidden.
const HIDDEN_MARKER: char = '.';

/// Directory scanner that enumerates regular files under a root.
///
/// The `Scanner` applies the exclusion set, the hidden-entry rule, and the
/// symlink policy from its [`ScanOptions`] while walking the tree.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// The options this scanner was built with.
    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.scan_options
    }

    /// Lazily enumerate every regular file reachable from `root`.
    ///
    /// Excluded and (unless requested) hidden directories are pruned without
    /// being descended into. Symlinks are only dereferenced when
    /// `follow_symlinks` is set; otherwise they are neither yielded nor
    /// traversed. With links followed, a link pointing back at one of its own
    /// ancestors is detected and skipped, so the walk always terminates.
    ///
    /// The root itself is never subject to the hidden or exclusion rules.
    /// Ordering is unspecified.
    pub fn files<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(root)
            .follow_links(self.scan_options.follow_symlinks)
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || self.should_visit(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
    }

    /// Lazily enumerate a [`FileRecord`] for every file [`files`](Self::files) yields.
    ///
    /// Files whose metadata cannot be read are dropped.
    pub fn records<'a>(&'a self, root: &Path) -> impl Iterator<Item = FileRecord> + 'a {
        collect_file_records(self.files(root))
    }

    /// Scan `root` and materialize all file records.
    ///
    /// The full list is needed anyway to rank the largest files, so callers
    /// that aggregate should use this rather than [`records`](Self::records).
    #[must_use]
    pub fn scan_directory(&self, root: &Path) -> Vec<FileRecord> {
        let records: Vec<FileRecord> = self.records(root).collect();

        debug!(
            "collected {} files under {}",
            records.len(),
            root.display()
        );

        records
    }

    /// Decide whether a non-root entry is yielded or descended into.
    fn should_visit(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();

        if !self.scan_options.include_hidden && is_hidden(&name) {
            trace!("skipping hidden entry {}", entry.path().display());
            return false;
        }

        if entry.file_type().is_dir() && self.scan_options.excluded_dirs.contains(&name) {
            trace!("skipping excluded directory {}", entry.path().display());
            return false;
        }

        true
    }
}

/// Map discovered paths to [`FileRecord`]s, dropping any that cannot be stat'ed.
///
/// Permission errors, files removed mid-scan, and other OS errors are logged
/// at debug level and the path is left out of the result.
pub fn collect_file_records<I>(paths: I) -> impl Iterator<Item = FileRecord>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .filter_map(|path| match fs::metadata(&path) {
            Ok(metadata) => Some(FileRecord::new(path, metadata.len())),
            Err(err) => {
                debug!("skipping {}: {err}", path.display());
                None
            }
        })
}

/// Resolve `path` to an absolute directory path suitable as a scan root.
///
/// # Errors
///
/// Returns [`ScanError::RootNotFound`] if the path does not exist and
/// [`ScanError::NotADirectory`] if it exists but is not a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, ScanError> {
    let Ok(resolved) = fs::canonicalize(path) else {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        return Err(ScanError::RootNotFound(absolute));
    };

    if !resolved.is_dir() {
        return Err(ScanError::NotADirectory(resolved));
    }

    Ok(resolved)
}

/// Whether a file name marks a hidden entry.
fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}
