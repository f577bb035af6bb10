use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_url_persists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .args(["config", "set-url", "http://10.0.0.5:3030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url set to"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url = \"http://10.0.0.5:3030\""));
}

#[test]
fn test_config_set_url_rejects_invalid() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .args(["config", "set-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}

#[test]
fn test_logout_removes_session_file() {
    let dir = tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    fs::write(&session_path, r#"{"token":"abc"}"#).unwrap();

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    assert!(!session_path.exists());
}

#[test]
fn test_logout_without_session_succeeds() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("credvault")
        .env("CREDVAULT_HOME", dir.path())
        .arg("logout")
        .assert()
        .success();
}
