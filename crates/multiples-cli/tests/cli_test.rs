//! Integration tests for the multiples CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the user's config directory. Keep `home` alive
/// until the command has run.
fn multiples(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("multiples").unwrap();
    cmd.env_remove("MULTIPLES_CONFIG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

/// Test basic help command
#[test]
fn test_help_command() {
    let home = TempDir::new().unwrap();
    multiples(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiples of 3, 5 and 7"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_classify_text_grid() {
    let home = TempDir::new().unwrap();
    multiples(&home)
        .args(["classify", "15", "--columns", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 (3,5)"))
        .stdout(predicate::str::contains(" 0 (3,5,7)"))
        .stdout(predicate::str::contains("Múltiplos de 3: 6"));
}

#[test]
fn test_classify_json() {
    let home = TempDir::new().unwrap();
    let output = multiples(&home)
        .args(["classify", "0", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "bound": 0,
            "records": [{ "number": 0, "divisors": [3, 5, 7], "primaryDivisor": 3 }]
        })
    );
}

#[test]
fn test_classify_rejects_negative_bound() {
    let home = TempDir::new().unwrap();
    multiples(&home)
        .args(["classify", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bound"));
}

#[test]
fn test_classify_rejects_text() {
    let home = TempDir::new().unwrap();
    multiples(&home)
        .args(["classify", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bound"));
}

#[test]
fn test_config_limits_bound() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "calculator": { "max_bound": 10 } }"#).unwrap();

    multiples(&dir)
        .arg("--config")
        .arg(&path)
        .args(["classify", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 10"));
}

#[test]
fn test_config_write_and_print() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("config.json");

    multiples(&dir)
        .arg("config")
        .arg("--write")
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    multiples(&dir)
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_bound\": 10000"));
}

#[test]
fn test_divisors_table() {
    let home = TempDir::new().unwrap();
    multiples(&home)
        .arg("divisors")
        .assert()
        .success()
        .stdout(predicate::str::contains("green"))
        .stdout(predicate::str::contains("7, 14, 21, 28, 35, ..."));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_comes_from_home() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(".config").join("multiples").join("config.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{ "calculator": { "max_bound": 10 } }"#).unwrap();

    multiples(&home)
        .args(["classify", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 10"));

    let clean = TempDir::new().unwrap();
    multiples(&clean).args(["classify", "11"]).assert().success();
}
