/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary with an isolated config directory
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{ContentBuilder, TestDir};
use predicates::prelude::*;

fn swipedeck(config_dir: &TestDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_swipedeck"));
    cmd.env("SWIPEDECK_CONFIG_DIR", config_dir.path()).env_remove("SWIPEDECK_LOG");
    cmd
}

#[test]
fn test_cli_validate_valid_content() {
    let dir = ContentBuilder::new()
        .with_tagged_item(&["chill"])
        .with_tagged_item(&["ghost"])
        .with_items(3)
        .with_category("chill", "Cosmic Chill")
        .write();

    swipedeck(&dir)
        .arg("validate")
        .arg(dir.content_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Content OK"))
        .stdout(predicate::str::contains("Items: 5"))
        .stdout(predicate::str::contains("Tagged items: 2"))
        .stdout(predicate::str::contains("Categories: 1"))
        .stdout(predicate::str::contains("Unknown tags: ghost"));
}

#[test]
fn test_cli_validate_duplicate_ids_fails() {
    let dir = TestDir::new();
    let path =
        dir.write_file("dup.json", r#"{"items":[{"id":7,"text":"a"},{"id":7,"text":"b"}]}"#);

    swipedeck(&dir)
        .arg("validate")
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate item id 7"));
}

#[test]
fn test_cli_validate_missing_file_fails() {
    let dir = TestDir::new();
    swipedeck(&dir)
        .arg("validate")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open content file"));
}

#[test]
fn test_cli_config_defaults() {
    let dir = TestDir::new();
    swipedeck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("[thresholds]"))
        .stdout(predicate::str::contains("commit = 200.0"))
        .stdout(predicate::str::contains("tally_mode = \"categorical\""));
}

#[test]
fn test_cli_config_reads_file() {
    let dir = TestDir::new();
    dir.write_file(
        "config.toml",
        "[session]\ntally_mode = \"binary\"\n\n[thresholds]\ncommit = 120.0\n",
    );

    swipedeck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("tally_mode = \"binary\""))
        .stdout(predicate::str::contains("commit = 120.0"));
}

#[test]
fn test_cli_explicit_invalid_config_fails() {
    let dir = TestDir::new();
    let path = dir.write_file("bad.toml", "[thresholds]\nfeedback = 300.0\ncommit = 200.0\n");

    swipedeck(&dir).arg("config").arg("--config").arg(path).assert().failure();
}

#[test]
fn test_cli_invalid_default_config_is_ignored() {
    let dir = TestDir::new();
    dir.write_file("config.toml", "this is not toml = = =");

    swipedeck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit = 200.0"))
        .stderr(predicate::str::contains("Ignoring config"));
}

#[test]
fn test_cli_help_flag() {
    let dir = TestDir::new();
    swipedeck(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Swipe through a deck"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn test_cli_version_flag() {
    let dir = TestDir::new();
    swipedeck(&dir).arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let dir = TestDir::new();
    swipedeck(&dir).arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_invalid_mode() {
    let dir = TestDir::new();
    swipedeck(&dir).args(["--mode", "sideways"]).assert().failure();
}

#[test]
fn test_cli_log_file_is_written() {
    let dir = TestDir::new();
    let log = dir.path().join("swipedeck.log");
    dir.write_file("config.toml", "not valid toml = = =");

    swipedeck(&dir)
        .env("SWIPEDECK_LOG", "warn")
        .arg("config")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("Ignoring config"));
}
