//! Configuration types for scanning and reporting.
//!
//! - [`ScanOptions`] and [`ExclusionSet`] control how the tree is traversed.
//! - [`ReportOptions`] controls which optional outputs are computed and how
//!   the result is rendered.
//! - [`FileConfig`] is the on-disk configuration file whose values act as
//!   defaults for the command-line flags.

pub mod file;
pub mod report;
pub mod scan;

pub use file::FileConfig;
pub use report::ReportOptions;
pub use scan::{DEFAULT_EXCLUDED_DIRS, ExclusionSet, ScanOptions};
