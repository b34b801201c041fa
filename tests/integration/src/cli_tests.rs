//! Black-box tests for the `refsync` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("refsync")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("write"));
}

#[test]
fn test_version_prints_name() {
    Command::cargo_bin("refsync")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("refsync"));
}

#[test]
fn test_check_help_mentions_diff() {
    Command::cargo_bin("refsync")
        .unwrap()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--diff"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("refsync")
        .unwrap()
        .arg("fix")
        .assert()
        .failure();
}

#[test]
fn test_missing_subcommand_prints_usage() {
    Command::cargo_bin("refsync")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_check_outside_workspace_fails() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("refsync")
        .unwrap()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not find workspace root."));
}

#[test]
fn test_write_outside_workspace_fails() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("refsync")
        .unwrap()
        .arg("write")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not find workspace root."));
}
