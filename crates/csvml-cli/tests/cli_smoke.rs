//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled binaries to verify that argument
//! parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

const BINARIES: [&str; 3] = ["csvml-boost", "csvml-forest", "csvml-svm"];

// -1 as observed by the parent process
#[cfg(unix)]
const FAILURE_CODE: i32 = 255;
#[cfg(not(unix))]
const FAILURE_CODE: i32 = -1;

fn cmd(bin: &str) -> Command {
    Command::cargo_bin(bin).unwrap()
}

// ---------------------------------------------------------------------------
// Argument handling
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_usage() {
    for bin in BINARIES {
        cmd(bin)
            .assert()
            .code(FAILURE_CODE)
            .stderr(predicate::str::contains("Usage"));
    }
}

#[test]
fn one_arg_is_a_usage_error() {
    cmd("csvml-boost")
        .arg("train.csv")
        .assert()
        .code(FAILURE_CODE)
        .stderr(predicate::str::contains("<test_csv>"));
}

#[test]
fn three_args_is_a_usage_error() {
    cmd("csvml-forest")
        .args(["a.csv", "b.csv", "c.csv"])
        .assert()
        .code(FAILURE_CODE);
}

#[test]
fn help_flag() {
    cmd("csvml-svm")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("training_csv"))
        .stdout(predicate::str::contains("test_csv"));
}

#[test]
fn version_flag() {
    cmd("csvml-boost")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("csvml-boost"));
}

// ---------------------------------------------------------------------------
// Input files
// ---------------------------------------------------------------------------

#[test]
fn nonexistent_training_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    for bin in BINARIES {
        cmd(bin)
            .current_dir(dir.path())
            .args(["/nonexistent/train.csv", "/nonexistent/test.csv"])
            .assert()
            .code(FAILURE_CODE)
            .stderr(predicate::str::contains(
                "ERROR opening file: /nonexistent/train.csv",
            ));
    }
    // Nothing is trained, so nothing is saved
    assert!(!dir.path().join("trainedBoost.xml").exists());
}

#[test]
fn short_training_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train.csv");
    std::fs::write(&train, "1,2,3,4,5,6,7,8,9,10,0\n").unwrap();

    cmd("csvml-boost")
        .current_dir(dir.path())
        .arg(&train)
        .arg(&train)
        .assert()
        .code(FAILURE_CODE)
        .stderr(predicate::str::contains("expected 8672"));
}
