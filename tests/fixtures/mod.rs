//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use archiewiki::config::Config;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the archiewiki binary
pub fn archiewiki_bin() -> &'static str {
    env!("CARGO_BIN_EXE_archiewiki")
}

/// Creates a config directory with latency and debounce disabled.
pub fn fast_config_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::new();
    config.repository.delay_ms = 0;
    config.search.debounce_ms = 0;
    config
        .save_to(&dir.path().join("config.toml"))
        .expect("Failed to write test config");
    dir
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(archiewiki_bin());
    cmd.env("ARCHIEWIKI_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against a fresh fast config.
pub fn run(args: &[&str]) -> Output {
    let dir = fast_config_dir();
    isolated_command(args, dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs a command that must succeed and parses its stdout as JSON.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = run(args);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Item ids from a JSON array of items.
pub fn ids(items: &serde_json::Value) -> Vec<String> {
    items
        .as_array()
        .expect("Expected an array of items")
        .iter()
        .map(|item| item["id"].as_str().expect("Item without id").to_string())
        .collect()
}
