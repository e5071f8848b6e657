//! Human-readable text report.
//!
//! Renders the scan configuration and its aggregation result as plain text,
//! in this order: resolved path, excluded directories, flag echo, total size,
//! then the optional per-extension breakdown and top-N listing.

use std::{
    fmt::{self, Display, Formatter},
    path::Path,
};

use crate::{aggregate::AggregationResult, config::ScanOptions, utils::human_readable_size};

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Text report for one finished scan, rendered through [`Display`].
pub struct TextReport<'a> {
    root: &'a Path,
    scan_options: &'a ScanOptions,
    result: &'a AggregationResult,
}

impl<'a> TextReport<'a> {
    #[must_use]
    pub const fn new(
        root: &'a Path,
        scan_options: &'a ScanOptions,
        result: &'a AggregationResult,
    ) -> Self {
        Self {
            root,
            scan_options,
            result,
        }
    }
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = self.scan_options;
        let result = self.result;

        writeln!(f, "Path: {}", self.root.display())?;
        if options.excluded_dirs.is_empty() {
            writeln!(f, "Excluded directories: (none)")?;
        } else {
            let names: Vec<&str> = options.excluded_dirs.iter().map(String::as_str).collect();
            writeln!(f, "Excluded directories: {}", names.join(", "))?;
        }
        writeln!(
            f,
            "Include hidden: {} | Follow symlinks: {}",
            yes_no(options.include_hidden),
            yes_no(options.follow_symlinks)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Total size: {} ({} bytes)",
            human_readable_size(result.total_bytes),
            result.total_bytes
        )?;

        if let Some(extensions) = result.extensions_by_size() {
            writeln!(f, "\nBreakdown by file extension (largest first):")?;
            for (ext, size) in extensions {
                writeln!(f, "  {ext:>8}: {} ({size} bytes)", human_readable_size(size))?;
            }
        }

        if let Some(top_files) = result.top_files.as_deref()
            && !top_files.is_empty()
        {
            writeln!(f, "\nTop {} largest files:", top_files.len())?;
            for file in top_files {
                writeln!(
                    f,
                    "  {:>12}  {}",
                    human_readable_size(file.size_bytes),
                    file.path.display()
                )?;
            }
        }

        Ok(())
    }
}

/// Render the full text report.
#[must_use]
pub fn render_text(root: &Path, scan_options: &ScanOptions, result: &AggregationResult) -> String {
    TextReport::new(root, scan_options, result).to_string()
}
