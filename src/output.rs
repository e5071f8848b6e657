//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the scan result is serialized to stdout
//! as a single JSON object, replacing the human-readable report.

use std::path::Path;

use serde::{Serialize, Serializer};

use crate::{
    aggregate::AggregationResult, config::ScanOptions, record::FileRecord,
    utils::human_readable_size,
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Absolute path of the scanned root.
    pub path: String,

    /// Total size of all counted files, in bytes.
    pub total_size_bytes: u64,

    /// Human-readable total (e.g. `"1.18 MiB"`).
    pub total_size_human: String,

    /// Excluded directory names, sorted.
    pub excluded_dirs: Vec<String>,

    /// Whether hidden entries were included.
    pub include_hidden: bool,

    /// Whether symbolic links were followed.
    pub follow_symlinks: bool,

    /// Bytes per extension, largest first. Present only when requested.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ordered_map"
    )]
    pub by_extension_bytes: Option<Vec<(String, u64)>>,

    /// Largest files, largest first. Present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_files: Option<Vec<JsonFileEntry>>,
}

/// A single file entry in the `top_files` array.
#[derive(Debug, Serialize)]
pub struct JsonFileEntry {
    /// Path to the file.
    pub path: String,

    /// File size in bytes.
    pub size_bytes: u64,

    /// Human-readable file size.
    pub size_human: String,

    /// Lowercased extension with leading dot, or empty.
    pub extension: String,
}

impl JsonOutput {
    /// Build the JSON document for a finished scan.
    #[must_use]
    pub fn new(root: &Path, scan_options: &ScanOptions, result: &AggregationResult) -> Self {
        Self {
            path: root.display().to_string(),
            total_size_bytes: result.total_bytes,
            total_size_human: human_readable_size(result.total_bytes),
            excluded_dirs: scan_options.excluded_dirs.iter().cloned().collect(),
            include_hidden: scan_options.include_hidden,
            follow_symlinks: scan_options.follow_symlinks,
            by_extension_bytes: result.extensions_by_size().map(|ordered| {
                ordered
                    .into_iter()
                    .map(|(ext, size)| (ext.to_string(), size))
                    .collect()
            }),
            top_files: result
                .top_files
                .as_ref()
                .map(|files| files.iter().map(JsonFileEntry::from_record).collect()),
        }
    }
}

impl JsonFileEntry {
    /// Convert a `FileRecord` into a `JsonFileEntry`.
    #[must_use]
    pub fn from_record(record: &FileRecord) -> Self {
        Self {
            path: record.path.display().to_string(),
            size_bytes: record.size_bytes,
            size_human: human_readable_size(record.size_bytes),
            extension: record.extension.clone(),
        }
    }
}

/// Serialize ordered `(key, value)` pairs as a JSON object, keeping their order.
#[allow(clippy::ref_option)]
fn serialize_ordered_map<S>(
    entries: &Option<Vec<(String, u64)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match entries {
        Some(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        None => serializer.serialize_none(),
    }
}
