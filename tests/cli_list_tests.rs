//! End-to-end tests for `country-explorer list`.

use std::path::Path;
use std::process::{Command, Output};

mod fixtures;
use fixtures::{write_sample_envelope, write_temp_file};
use tempfile::TempDir;

/// Runs the binary with an isolated config directory.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_country-explorer"))
        .env("COUNTRY_EXPLORER_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn list(extra: &[&str]) -> Output {
    let (_data_dir, data) = write_sample_envelope();
    let config_dir = TempDir::new().unwrap();
    let data = data.to_string_lossy().to_string();

    let mut args = vec!["list", "--data", data.as_str()];
    args.extend_from_slice(extra);
    run(&args, config_dir.path())
}

fn list_json(extra: &[&str]) -> serde_json::Value {
    let mut args = extra.to_vec();
    args.push("--json");
    let output = list(&args);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Text Output
// ============================================================================

#[test]
fn test_list_first_page() {
    let output = list(&[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Page 1 of 2 (20 countries)"));
    assert!(stdout.contains("United Arab Emirates"));
    // Page 2 is not printed
    assert!(!stdout.contains("United States"));
}

#[test]
fn test_list_not_found() {
    let output = list(&["xyz"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cannot Found Country.."));
}

#[test]
fn test_list_invalid_group_prints_warning() {
    let output = list(&["united", "planet"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning: Grouping is not appropriate"));
    assert!(stdout.contains("United Kingdom"));
}

#[test]
fn test_list_text_shows_highlight_hex() {
    let output = list(&["united"]);
    assert_eq!(output.status.code(), Some(0));

    // US is auto-selected as the last of three matches
    let stdout = String::from_utf8_lossy(&output.stdout);
    let us_line = stdout
        .lines()
        .find(|line| line.contains("United States"))
        .expect("US row printed");
    assert!(us_line.starts_with('*'));
    assert!(us_line.ends_with("[Yellow #FFFF00]"));
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_list_search_json() {
    let result = list_json(&["united"]);

    assert_eq!(result["title"], "Search By: United");
    assert_eq!(result["page"], 1);
    assert_eq!(result["total_pages"], 1);
    assert_eq!(result["matched"], 3);

    let items = result["items"].as_array().unwrap();
    let codes: Vec<&str> = items.iter().map(|i| i["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["AE", "GB", "US"]);

    // Shorter than ten: the last item is auto-selected
    assert_eq!(items[2]["is_selected"], true);
    assert_eq!(items[2]["highlight"], "Yellow");
    assert_eq!(items[2]["background"], "Yellow");
    assert!(items[0]["background"].is_null());
}

#[test]
fn test_list_search_and_group_json() {
    let result = list_json(&["tt", "continent"]);
    assert_eq!(result["title"], "Search & Group By: Tt & Continent");
    assert_eq!(result["items"][0]["name"], "Trinidad and Tobago");
    assert_eq!(result["items"][0]["continent"]["name"], "North America");
}

#[test]
fn test_list_group_all_pages_json() {
    let result = list_json(&["continent", "--all"]);
    assert!(result["page"].is_null());

    let items = result["items"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["code"], "EG");
    assert_eq!(items[19]["code"], "BR");
    assert_eq!(items[15]["page"], 2);
}

#[test]
fn test_list_toggle_json() {
    // FR is the auto-selected 10th item; toggling deselects it with a new color
    let result = list_json(&["--toggle", "FR"]);
    let fr = &result["items"][9];
    assert_eq!(fr["code"], "FR");
    assert_eq!(fr["is_selected"], false);
    assert_eq!(fr["highlight"], "SteelBlue");
    assert_eq!(fr["background"], "SteelBlue");
}

// ============================================================================
// Exit Codes
// ============================================================================

#[test]
fn test_list_page_out_of_range() {
    let output = list(&["--page", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_list_unknown_toggle_code() {
    let output = list(&["--toggle", "ZZ"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_list_runs_when_log_dir_unwritable() {
    // A regular file as config dir makes the log directory uncreatable
    let (_data_dir, data) = write_sample_envelope();
    let (_file_dir, not_a_dir) = write_temp_file("config-file", "");
    let output = run(
        &["list", "--data", &data.to_string_lossy(), "united"],
        &not_a_dir,
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Search By: United"));
}

#[test]
fn test_list_missing_data_file() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["list", "--data", "/definitely/not/here.json"], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load countries"));
}

#[test]
fn test_list_graphql_errors() {
    let (_dir, path) = write_temp_file(
        "errors.json",
        r#"{"data": null, "errors": [{"message": "Syntax Error"}]}"#,
    );
    let config_dir = TempDir::new().unwrap();
    let output = run(&["list", "--data", &path.to_string_lossy()], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Syntax Error"));
}
