//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use codebase_size::config::file::{FileConfig, expand_tilde};
use codebase_size::config::{ExclusionSet, ReportOptions, ScanOptions};

/// Command-line arguments that control directory traversal.
#[derive(Parser)]
struct ScanningArgs {
    /// Include dot-directories and dot-files (e.g. .vscode, .env)
    #[arg(long)]
    include_hidden: bool,

    /// Follow symbolic links while traversing
    ///
    /// Links that point back into one of their own ancestors are detected
    /// and skipped, so cycles cannot make the scan run forever.
    #[arg(long)]
    follow_symlinks: bool,

    /// Do not exclude common cache and dependency directories
    ///
    /// By default .git, __pycache__, node_modules, venv, .venv, env, build,
    /// dist, .mypy_cache, .pytest_cache and .ruff_cache are skipped.
    #[arg(long)]
    no_default_excludes: bool,

    /// Additional directory name to exclude (exact name match)
    ///
    /// Repeat the flag for several names: `--exclude coverage --exclude .idea`
    #[arg(long, value_name = "NAME", action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Log skipped entries (permission errors, vanished files) to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Command-line arguments that shape the report.
#[derive(Parser)]
struct OutputArgs {
    /// Show a breakdown by file extension
    #[arg(long)]
    by_ext: bool,

    /// Show the N largest files (0 to disable)
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Output results as a single JSON object instead of text
    #[arg(long)]
    json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "codebase-size")]
#[command(
    about = "Measure how much space your codebase uses on disk. By default, common cache and dependency directories are excluded."
)]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// The directory to measure (defaults to the current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// Resolve the directory to measure.
    ///
    /// Priority: CLI argument > config file `path` > current directory (`.`).
    /// Tilde expansion is applied to a path originating from the config file.
    #[must_use]
    pub fn root(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref path) = self.path {
            return path.clone();
        }

        config
            .path
            .as_deref()
            .map_or_else(|| PathBuf::from("."), expand_tilde)
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - boolean flags: CLI flag `||` config value `||` `false`
    /// - default exclusions apply unless `--no-default-excludes` is given or
    ///   the config sets `default_excludes = false`
    /// - extra exclusions are merged from both sources
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let scanning = &config.scanning;

        let use_defaults =
            !self.scanning.no_default_excludes && scanning.default_excludes.unwrap_or(true);

        let mut excluded_dirs = if use_defaults {
            ExclusionSet::with_defaults()
        } else {
            ExclusionSet::new()
        };
        excluded_dirs.extend(scanning.exclude.iter().flatten().cloned());
        excluded_dirs.extend(self.scanning.exclude.iter().cloned());

        ScanOptions {
            excluded_dirs,
            include_hidden: self.scanning.include_hidden
                || scanning.include_hidden.unwrap_or(false),
            follow_symlinks: self.scanning.follow_symlinks
                || scanning.follow_symlinks.unwrap_or(false),
        }
    }

    /// Whether debug logging is enabled: `--verbose` `||` config value `||` `false`.
    #[must_use]
    pub fn verbose(&self, config: &FileConfig) -> bool {
        self.scanning.verbose || config.scanning.verbose.unwrap_or(false)
    }

    /// Extract report options from CLI args and config file.
    ///
    /// - **by-ext / json**: CLI flag `||` config value `||` `false`
    /// - **top**: CLI > config > `0`
    #[must_use]
    pub fn report_options(&self, config: &FileConfig) -> ReportOptions {
        let output = &config.output;

        ReportOptions {
            by_extension: self.output.by_ext || output.by_ext.unwrap_or(false),
            top_n: self.output.top.or(output.top).unwrap_or(0),
            json: self.output.json || output.json.unwrap_or(false),
        }
    }

    /// Whether `--json` was passed on the command line.
    ///
    /// Used before the config file is loaded, to keep warnings off stdout.
    #[must_use]
    pub const fn json_flag(&self) -> bool {
        self.output.json
    }
}
