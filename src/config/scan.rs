//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control which entries the scanner
//! visits: the set of excluded directory names, whether hidden entries are
//! included, and whether symbolic links are followed.

use std::collections::{BTreeSet, btree_set};

/// Directory names excluded unless `--no-default-excludes` is given.
///
/// These usually hold caches or third-party dependencies rather than authored
/// code, and would otherwise dominate the totals.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    "env",
    "build",
    "dist",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
];

/// Set of directory names that are never descended into.
///
/// Matching is by exact file name, not by path, so `build` excludes every
/// directory called `build` at any depth. The set is ordered so it can be
/// echoed back deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    /// An empty exclusion set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// The built-in [`DEFAULT_EXCLUDED_DIRS`].
    #[must_use]
    pub fn with_defaults() -> Self {
        DEFAULT_EXCLUDED_DIRS.iter().copied().collect()
    }

    /// Add a single directory name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    /// Whether `name` is excluded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Excluded names in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of excluded names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no names are excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a ExclusionSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Directory names that are never traversed
    pub excluded_dirs: ExclusionSet,

    /// Whether dot-files and dot-directories are included
    pub include_hidden: bool,

    /// Whether symbolic links are dereferenced
    pub follow_symlinks: bool,
}
