//! Integration tests for the composelint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_compose(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("docker-compose.yml"), content).unwrap();
    temp
}

const CLEAN_COMPOSE: &str = "name: shop\nservices:\n  web:\n    image: nginx\n";

const COMPOSE_WITH_VERSION: &str =
    "name: shop\nversion: '3'\nservices:\n  web:\n    image: nginx\n";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Lint Docker Compose files"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_clean_file_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(CLEAN_COMPOSE);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
    Ok(())
}

#[test]
fn cli_reports_version_field() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(COMPOSE_WITH_VERSION);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.assert().success().stdout(
        predicate::str::contains("minor[no-version-field]")
            .and(predicate::str::contains("The \"version\" field should not be present.")),
    );
    Ok(())
}

#[test]
fn cli_strict_fails_on_minor_issues() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(COMPOSE_WITH_VERSION);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.arg("--strict");
    cmd.assert().failure().code(1);
    Ok(())
}

#[test]
fn cli_major_issue_fails_without_strict() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose("name: shop\nservices:\n  web:\n    build: .\n    image: nginx\n");
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("major[no-build-and-image]"));
    Ok(())
}

#[test]
fn cli_fix_rewrites_file_and_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(COMPOSE_WITH_VERSION);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.args(["--fix", "--strict"]);
    cmd.assert().success();

    let rewritten = fs::read_to_string(temp.path().join("docker-compose.yml"))?;
    assert!(!rewritten.contains("version:"));
    assert!(rewritten.contains("services:"));
    Ok(())
}

#[test]
fn cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(COMPOSE_WITH_VERSION);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.args(["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["summary"]["total"], 1);
    assert_eq!(
        parsed["files"][0]["diagnostics"][0]["rule"],
        "no-version-field"
    );
    Ok(())
}

#[test]
fn cli_sarif_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(COMPOSE_WITH_VERSION);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.args(["--format", "sarif"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "composelint");
    Ok(())
}

#[test]
fn cli_unknown_format_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(CLEAN_COMPOSE);
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.args(["--format", "xml"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown output format"));
    Ok(())
}

#[test]
fn cli_parse_error_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose("services:\n  web: [unclosed\n");
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn cli_no_files_found_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No compose files found"));
    Ok(())
}

#[test]
fn cli_settings_file_disables_rule() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_compose(COMPOSE_WITH_VERSION);
    fs::write(
        temp.path().join(".composelint.yml"),
        "rules:\n  no-version-field: false\n",
    )?;

    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.current_dir(temp.path());
    cmd.arg("--strict");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
    Ok(())
}

#[test]
fn cli_schema_prints_settings_schema() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("composelint"));
    cmd.arg("--schema");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(parsed["properties"]["rules"]["properties"]["no-version-field"].is_object());
    Ok(())
}
