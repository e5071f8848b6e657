//! # codebase-size
//!
//! Measure how much space a codebase uses on disk.
//!
//! The binary resolves options from the command line and the config file,
//! validates the root directory, scans it, aggregates the collected file
//! sizes, and prints either a text report or a single JSON object.
//!
//! ## Exit codes
//!
//! - `0` on success
//! - `1` on unexpected failures (e.g. writing the config file)
//! - `2` when the root does not exist or is not a directory
//!
//! ## Usage
//!
//! ```bash
//! codebase-size --path . --by-ext --top 10
//! codebase-size --json
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use codebase_size::{
    ScanError, Scanner, aggregate, config::FileConfig, output::JsonOutput, report::render_text,
    resolve_root,
};
use colored::Colorize;
use std::process::exit;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Entry point for the codebase-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting. An invalid root exits with code 2, any
/// other error with code 1.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        let code = if err.downcast_ref::<ScanError>().is_some() {
            ScanError::EXIT_CODE
        } else {
            1
        };
        exit(code);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns [`ScanError`] when the root is invalid, and errors from config
/// file handling or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config(args.json_flag());
    let scan_options = args.scan_options(&file_config);
    let report_options = args.report_options(&file_config);

    setup_logging(args.verbose(&file_config));

    let root = resolve_root(&args.root(&file_config))?;
    debug!("scanning {}", root.display());

    let scanner = Scanner::new(scan_options);
    let records = scanner.scan_directory(&root);
    let result = aggregate(&records, &report_options);

    if report_options.json {
        let output = JsonOutput::new(&root, scanner.options(), &result);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_text(&root, scanner.options(), &result));
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output (skipped entries, file counts) when `verbose` is set.
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# codebase-size configuration
# All values shown are their defaults. Uncomment and change as needed.

# Directory to measure when --path is not given
# path = "."

[scanning]
# Include dot-files and dot-directories
# include_hidden = false

# Follow symbolic links while traversing
# follow_symlinks = false

# Exclude .git, node_modules, __pycache__, venv, build, dist, ... by default
# default_excludes = true

# Additional directory names to exclude (exact name match)
# exclude = []

# Log skipped entries to stderr
# verbose = false

[output]
# Show a breakdown by file extension
# by_ext = false

# Show the N largest files (0 = disabled)
# top = 0

# Print JSON instead of the text report
# json = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load_from(p)?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: usize) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_names(val: Option<&[String]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|n| format!("\"{n}\"")).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let path_str = config.path.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
path             = {path}

[scanning]
include_hidden   = {include_hidden}
follow_symlinks  = {follow_symlinks}
default_excludes = {default_excludes}
exclude          = {exclude}
verbose          = {verbose}

[output]
by_ext           = {by_ext}
top              = {top}
json             = {json}",
        path = path_str,
        include_hidden = show_bool(config.scanning.include_hidden, false),
        follow_symlinks = show_bool(config.scanning.follow_symlinks, false),
        default_excludes = show_bool(config.scanning.default_excludes, true),
        exclude = show_names(config.scanning.exclude.as_deref()),
        verbose = show_bool(config.scanning.verbose, false),
        by_ext = show_bool(config.output.by_ext, false),
        top = show_usize(config.output.top, 0),
        json = show_bool(config.output.json, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
///
/// The warning is suppressed in JSON mode so stdout/stderr stay machine-friendly.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
