//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vipergen() -> Command {
    Command::cargo_bin("vipergen").unwrap()
}

#[test]
fn missing_module_name_is_a_usage_error() {
    vipergen().assert().failure().code(2);
}

#[test]
fn missing_prefix_is_a_usage_error_and_writes_nothing() {
    let temp = TempDir::new().unwrap();

    vipergen()
        .current_dir(temp.path())
        .arg("Login")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PREFIX"));

    assert!(!temp.path().join("Login").exists());
}

#[test]
fn empty_prefix_is_a_named_error() {
    let temp = TempDir::new().unwrap();

    vipergen()
        .current_dir(temp.path())
        .args(["Login", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid prefix"));

    assert!(!temp.path().join("Login").exists());
}

#[test]
fn error_with_suggestions_invalid_module_name() {
    vipergen()
        .args([".hidden", "Login"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid module name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn path_separator_in_module_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    vipergen()
        .current_dir(temp.path())
        .args(["nested/Login", "Login"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("path separators"));

    assert!(!temp.path().join("nested").exists());
}

#[test]
fn malformed_prefix_is_rejected_with_suggestions() {
    vipergen()
        .args(["Login", "1Login"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid prefix"))
        .stderr(predicate::str::contains("start with a letter"));
}

#[test]
fn invalid_wiring_flag_is_rejected_by_clap() {
    vipergen()
        .args(["Login", "Login", "--wiring", "mvc"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_wiring_in_config_is_a_named_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("vipergen.toml");
    std::fs::write(&config, "[defaults]\nwiring = \"mvc\"\n").unwrap();

    vipergen()
        .current_dir(temp.path())
        .args(["Login", "Login", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unsupported wiring style"));

    assert!(!temp.path().join("Login").exists());
}
