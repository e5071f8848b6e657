//! Aggregation of collected file records into totals and rankings.

use std::collections::BTreeMap;

use crate::{config::ReportOptions, record::FileRecord};

/// Key used in the per-extension breakdown for files without an extension.
pub const NO_EXTENSION_LABEL: &str = "<no_ext>";

/// Totals and optional breakdowns computed from one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregationResult {
    /// Sum of the sizes of every collected file
    pub total_bytes: u64,

    /// Number of files that contributed to `total_bytes`
    pub file_count: usize,

    /// Bytes per extension, present only when requested
    pub by_extension: Option<BTreeMap<String, u64>>,

    /// Largest files in descending size order, present only when requested
    pub top_files: Option<Vec<FileRecord>>,
}

impl AggregationResult {
    /// Per-extension totals ordered largest first, ties by extension name.
    ///
    /// Returns `None` when the breakdown was not requested.
    #[must_use]
    pub fn extensions_by_size(&self) -> Option<Vec<(&str, u64)>> {
        self.by_extension.as_ref().map(|totals| {
            let mut sorted: Vec<(&str, u64)> =
                totals.iter().map(|(ext, &size)| (ext.as_str(), size)).collect();
            // BTreeMap iteration is already name-ordered; a stable sort keeps
            // that order among equal sizes.
            sorted.sort_by(|a, b| b.1.cmp(&a.1));
            sorted
        })
    }
}

/// Aggregate the collected records according to `options`.
///
/// The total is always computed. The per-extension breakdown is computed when
/// `options.by_extension` is set, and the top-N listing when `options.top_n`
/// is greater than zero.
#[must_use]
pub fn aggregate(records: &[FileRecord], options: &ReportOptions) -> AggregationResult {
    AggregationResult {
        total_bytes: records.iter().map(|r| r.size_bytes).sum(),
        file_count: records.len(),
        by_extension: options
            .by_extension
            .then(|| summarize_by_extension(records)),
        top_files: (options.top_n > 0).then(|| top_n_largest(records, options.top_n)),
    }
}

/// Sum sizes per extension, grouping extension-less files under
/// [`NO_EXTENSION_LABEL`].
#[must_use]
pub fn summarize_by_extension(records: &[FileRecord]) -> BTreeMap<String, u64> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        let key = if record.extension.is_empty() {
            NO_EXTENSION_LABEL
        } else {
            record.extension.as_str()
        };
        *totals.entry(key.to_string()).or_insert(0) += record.size_bytes;
    }

    totals
}

/// The `n` largest records, sorted descending by size.
///
/// The sort is stable, so records of equal size keep their collection order.
/// Fewer than `n` records yields all of them.
#[must_use]
pub fn top_n_largest(records: &[FileRecord], n: usize) -> Vec<FileRecord> {
    let mut ranked: Vec<&FileRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    ranked.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, size: u64) -> FileRecord {
        FileRecord::new(PathBuf::from(path), size)
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            record("a.txt", 100),
            record("b.txt", 50),
            record("lib.rs", 300),
            record("Makefile", 20),
            record("LICENSE", 30),
            record("img.PNG", 300),
        ]
    }

    fn all_outputs(top_n: usize) -> ReportOptions {
        ReportOptions {
            by_extension: true,
            top_n,
            json: false,
        }
    }

    #[test]
    fn test_total_bytes_is_sum() {
        let result = aggregate(&sample(), &ReportOptions::default());

        assert_eq!(result.total_bytes, 800);
        assert_eq!(result.file_count, 6);
        assert!(result.by_extension.is_none());
        assert!(result.top_files.is_none());
    }

    #[test]
    fn test_by_extension_groups_and_sums() {
        let result = aggregate(&sample(), &all_outputs(0));
        let by_ext = result.by_extension.unwrap();

        assert_eq!(by_ext.get(".txt"), Some(&150));
        assert_eq!(by_ext.get(".rs"), Some(&300));
        assert_eq!(by_ext.get(".png"), Some(&300));
        assert_eq!(by_ext.get(NO_EXTENSION_LABEL), Some(&50));
        assert_eq!(by_ext.values().sum::<u64>(), result.total_bytes);
    }

    #[test]
    fn test_extensions_by_size_descending_with_name_tiebreak() {
        let result = aggregate(&sample(), &all_outputs(0));
        let ordered = result.extensions_by_size().unwrap();

        assert_eq!(
            ordered,
            vec![
                (".png", 300),
                (".rs", 300),
                (".txt", 150),
                (NO_EXTENSION_LABEL, 50),
            ]
        );
    }

    #[test]
    fn test_extensions_by_size_absent_when_not_requested() {
        let result = aggregate(&sample(), &ReportOptions::default());
        assert!(result.extensions_by_size().is_none());
    }

    #[test]
    fn test_top_n_sorted_descending_and_stable() {
        let top = top_n_largest(&sample(), 3);

        let paths: Vec<_> = top.iter().map(|r| r.path.to_string_lossy().into_owned()).collect();
        assert_eq!(paths, vec!["lib.rs", "img.PNG", "a.txt"]);
    }

    #[test]
    fn test_top_n_more_than_available() {
        let records = sample();
        let top = top_n_largest(&records, 100);

        assert_eq!(top.len(), records.len());
        assert!(top.windows(2).all(|w| w[0].size_bytes >= w[1].size_bytes));
        assert!(top.iter().all(|r| records.contains(r)));
    }

    #[test]
    fn test_top_zero_disables_listing() {
        let result = aggregate(&sample(), &all_outputs(0));
        assert!(result.top_files.is_none());

        let result = aggregate(&sample(), &all_outputs(2));
        assert_eq!(result.top_files.map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate(&[], &all_outputs(5));

        assert_eq!(result.total_bytes, 0);
        assert_eq!(result.file_count, 0);
        assert_eq!(result.by_extension, Some(BTreeMap::new()));
        assert_eq!(result.top_files, Some(vec![]));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = sample();
        let first = aggregate(&records, &all_outputs(4));
        let second = aggregate(&records, &all_outputs(4));

        assert_eq!(first, second);
    }
}
