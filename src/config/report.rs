//! Options that shape the aggregation result and its presentation.

/// Which optional outputs to compute, and how to print them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Compute a per-extension size breakdown
    pub by_extension: bool,

    /// Number of largest files to list (0 disables the listing)
    pub top_n: usize,

    /// Emit a single JSON object instead of the text report
    pub json: bool,
}
