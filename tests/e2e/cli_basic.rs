//! Basic CLI tests for td
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs. The browser itself needs a
//! terminal, so every accepted invocation here stops at --help.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn td() -> Command {
    Command::cargo_bin("td").unwrap()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    td().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("td [OPTIONS] [PATH]"))
        .stdout(predicate::str::contains("--no-hidden"));
}

#[test]
fn help_lists_key_bindings() {
    td().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYBINDINGS:"))
        .stdout(predicate::str::contains("Ctrl+T"));
}

#[test]
fn version_flag_shows_version() {
    td().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("td "))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    td().arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    td().arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn invalid_short_option_returns_exit_code_3() {
    td().arg("-x")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option: -x"));
}

#[test]
fn nonexistent_path_returns_exit_code_3() {
    td().arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn file_path_returns_exit_code_3() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("notes.txt");
    std::fs::write(&file, "hello").unwrap();

    td().arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn log_file_without_value_returns_exit_code_3() {
    td().arg("--log-file")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty().not());
}

// =============================================================================
// Valid Options
// =============================================================================

#[test]
fn temp_directory_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    // Path is validated before --help exits
    td().arg(temp_dir.path()).arg("--help").assert().success();
}

#[test]
fn display_flags_are_accepted() {
    td().args(["-a", "--no-hidden", "-i", "--no-icons", "--help"])
        .assert()
        .success();
}

#[test]
fn log_file_flag_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("td.log");
    td().arg("--log-file")
        .arg(&log)
        .arg("--help")
        .assert()
        .success();
}
