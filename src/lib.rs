//! # codebase-size
//!
//! A small CLI tool that measures how much space a codebase uses on disk.
//!
//! The tool walks a directory tree, skipping common dependency and cache
//! directories, and sums the sizes of every regular file it finds. It can
//! optionally break the total down by file extension and list the largest
//! files, and prints either a human-readable report or a single JSON object.
//!
//! ## Features
//!
//! - Iterative traversal that never recurses on the call stack
//! - Exclusion of directories by exact name (`.git`, `node_modules`, ...)
//! - Optional inclusion of hidden entries and symlink following
//! - Per-extension breakdown and top-N largest files
//! - Human-readable or JSON output
//! - Persistent configuration via `~/.config/codebase-size/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Measure the current directory
//! codebase-size
//!
//! # Breakdown by extension plus the 10 largest files
//! codebase-size --path ~/src/project --by-ext --top 10
//!
//! # Machine-readable output
//! codebase-size --json
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod report;
pub mod scanner;
pub mod utils;

pub use aggregate::{AggregationResult, NO_EXTENSION_LABEL, aggregate};
pub use config::{ExclusionSet, ReportOptions, ScanOptions};
pub use error::ScanError;
pub use record::FileRecord;
pub use scanner::{Scanner, collect_file_records, resolve_root};
