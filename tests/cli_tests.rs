//! End-to-end tests for the `codebase-size` binary.
//!
//! Each test points `XDG_CONFIG_HOME` and `HOME` at a scratch directory so a
//! developer's own config file never leaks into the results.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, vec![b'0'; len]).expect("Failed to write file");
}

/// Build a command with an isolated config directory.
fn codebase_size(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("codebase-size").expect("binary should be built");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    create_file(&dir.path().join("a.txt"), 100);
    create_file(&dir.path().join("b.txt"), 50);
    create_file(&dir.path().join(".secret"), 10);
    create_file(&dir.path().join("node_modules/big.bin"), 10_000);
    dir
}

#[test]
fn test_text_report() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();

    codebase_size(config_home.path())
        .arg("--path")
        .arg(tree.path())
        .args(["--by-ext", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total size: 150 bytes (150 bytes)"))
        .stdout(predicate::str::contains("Include hidden: no | Follow symlinks: no"))
        .stdout(predicate::str::contains("Breakdown by file extension (largest first):"))
        .stdout(predicate::str::contains("    .txt: 150 bytes (150 bytes)"))
        .stdout(predicate::str::contains("Top 1 largest files:"))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt").not());
}

#[test]
fn test_json_report() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();

    let output = codebase_size(config_home.path())
        .arg("--path")
        .arg(tree.path())
        .args(["--json", "--by-ext", "--top", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["total_size_bytes"], 150);
    assert_eq!(json["total_size_human"], "150 bytes");
    assert_eq!(json["include_hidden"], false);
    assert_eq!(json["follow_symlinks"], false);
    assert_eq!(json["by_extension_bytes"], serde_json::json!({ ".txt": 150 }));
    assert_eq!(json["top_files"].as_array().unwrap().len(), 1);
    assert_eq!(json["top_files"][0]["size_bytes"], 100);

    let excluded: Vec<&str> = json["excluded_dirs"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    let mut sorted = excluded.clone();
    sorted.sort_unstable();
    assert_eq!(excluded, sorted);
    assert!(excluded.contains(&"node_modules"));
}

#[test]
fn test_json_without_optional_sections() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();

    let output = codebase_size(config_home.path())
        .arg("--path")
        .arg(tree.path())
        .args(["--json", "--include-hidden", "--no-default-excludes"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(json["total_size_bytes"], 10_160);
    assert_eq!(json["excluded_dirs"], serde_json::json!([]));
    assert!(!object.contains_key("by_extension_bytes"));
    assert!(!object.contains_key("top_files"));
}

#[test]
fn test_missing_root_exits_with_code_2() {
    let config_home = TempDir::new().unwrap();
    let missing = config_home.path().join("does-not-exist");

    codebase_size(config_home.path())
        .arg("--path")
        .arg(&missing)
        .arg("--json")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "path does not exist or is not a directory",
        ));
}

#[test]
fn test_file_root_exits_with_code_2() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();

    codebase_size(config_home.path())
        .arg("--path")
        .arg(tree.path().join("a.txt"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

// dirs only honours XDG_CONFIG_HOME on Linux
#[test]
#[cfg(target_os = "linux")]
fn test_config_file_supplies_defaults() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();
    create_file(&tree.path().join("coverage/report.html"), 5_000);

    let config_dir = config_home.path().join("codebase-size");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "path = {:?}\n\n[scanning]\nexclude = [\"coverage\"]\n\n[output]\njson = true\n",
            tree.path().display().to_string()
        ),
    )
    .unwrap();

    let output = codebase_size(config_home.path()).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_size_bytes"], 150);
}

// dirs only honours XDG_CONFIG_HOME on Linux
#[test]
#[cfg(target_os = "linux")]
fn test_malformed_config_falls_back_to_defaults() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();

    let config_dir = config_home.path().join("codebase-size");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output\n").unwrap();

    codebase_size(config_home.path())
        .arg("--path")
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total size: 150 bytes"))
        .stderr(predicate::str::contains("Failed to load config file"));
}

// dirs only honours XDG_CONFIG_HOME on Linux
#[test]
#[cfg(target_os = "linux")]
fn test_config_init_then_path() {
    let config_home = TempDir::new().unwrap();

    codebase_size(config_home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file written to:"));

    let written = config_home.path().join("codebase-size").join("config.toml");
    assert!(written.exists());

    codebase_size(config_home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    codebase_size(config_home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(found)"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let config_home = TempDir::new().unwrap();
    let tree = sample_tree();

    let output = codebase_size(config_home.path())
        .arg("--path")
        .arg(tree.path())
        .args(["--json", "--verbose"])
        .output()
        .unwrap();

    assert!(output.status.success());
    // stdout must remain a single parseable JSON document
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_size_bytes"], 150);
    assert!(String::from_utf8_lossy(&output.stderr).contains("collected 2 files"));
}
