//! End-to-end tests for the config command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::standup;

#[test]
fn test_config_shows_builtin_defaults() {
    let config = TempDir::new().unwrap();

    standup(config.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup-CLI Configuration"))
        .stdout(predicate::str::contains("Default days: 1"))
        .stdout(predicate::str::contains("Default path: . (current directory)"))
        .stdout(predicate::str::contains("Author filter: (none)"));
}

#[test]
fn test_config_set_persists() {
    let config = TempDir::new().unwrap();

    standup(config.path())
        .args(["config", "set", "days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set days = 7"));

    assert!(config.path().join("config.toml").exists());

    standup(config.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default days: 7"));
}

#[test]
fn test_config_unset_restores_default() {
    let config = TempDir::new().unwrap();

    standup(config.path()).args(["config", "set", "days", "14"]).assert().success();
    standup(config.path())
        .args(["config", "unset", "days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unset days"));

    standup(config.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default days: 1"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let config = TempDir::new().unwrap();

    standup(config.path())
        .args(["config", "set", "verbosity", "high"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_config_set_rejects_bad_value() {
    let config = TempDir::new().unwrap();

    standup(config.path())
        .args(["config", "set", "days", "soon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value for days"));
}

#[test]
fn test_config_json() {
    let config = TempDir::new().unwrap();

    standup(config.path()).args(["config", "set", "copy", "true"]).assert().success();

    let output = standup(config.path()).args(["config", "--json"]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["days"], 1);
    assert_eq!(value["copy"], true);
    assert!(value["config_path"].as_str().unwrap().ends_with("config.toml"));
}

#[test]
fn test_config_set_json_reports_success() {
    let config = TempDir::new().unwrap();

    let output = standup(config.path())
        .args(["config", "set", "author", "alice", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["success"], true);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.toml"), "this is { not toml").unwrap();

    standup(config.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default days: 1"));
}
