use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn validate_command_ok() {
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.arg("validate");
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("aquifer-outlook validate ok"));
    assert!(text.contains("years: 51"));
    assert!(text.contains("scenarios: 3"));
}

#[test]
fn validate_reports_net_check_warning() {
    let tmp = TempDir::new().unwrap();
    let cfg = write_config(
        tmp.path(),
        r#"{ "net_change_check": { "base": -5.4, "final": -15.0 } }"#,
    );
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.arg("validate").arg("--config").arg(&cfg);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("warnings:"));
    assert!(text.contains("net change at 2050"));
}

#[test]
fn validate_rejects_unordered_scenarios() {
    let tmp = TempDir::new().unwrap();
    let cfg = write_config(
        tmp.path(),
        r#"{ "scenario_initial_storage": { "low": 600.0 } }"#,
    );
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.arg("validate").arg("--config").arg(&cfg);
    cmd.assert().failure();
}
