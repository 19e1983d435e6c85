//! End-to-end tests for `country-explorer config`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the binary with an isolated config directory.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_country-explorer"))
        .env("COUNTRY_EXPLORER_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_config_path() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["config", "--path"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        config_dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_show_defaults_json() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["config", "--json"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");

    assert_eq!(result["exists"], false);
    assert_eq!(
        result["source"]["endpoint"],
        "https://countries.trevorblades.com/graphql"
    );
    assert_eq!(result["source"]["timeout_secs"], 10);
    assert_eq!(result["ui"]["theme_mode"], "Auto");
}

#[test]
fn test_config_init_writes_once() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");

    let output = run(&["config", "--init"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[source]"));

    let output = run(&["config", "--init"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("already exists"));
}

#[test]
fn test_config_human_readable() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[source]\nendpoint = \"http://localhost:4000/graphql\"\n\n[ui]\ntheme_mode = \"Light\"\n",
    )
    .unwrap();

    let output = run(&["config"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://localhost:4000/graphql"));
    assert!(stdout.contains("Timeout:  10s"));
    assert!(stdout.contains("Light"));
}

#[test]
fn test_invalid_config_is_validation_error() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[source]\ntimeout_secs = 0\n",
    )
    .unwrap();

    let output = run(&["config"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("timeout_secs"));

    // list refuses to run on a broken config too
    let output = run(&["list", "--data", "unused.json"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}
