use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

const OUTPUTS: [&str; 4] = [
    "outlook.json",
    "mass_balance.tsv",
    "net_change.svg",
    "storage_scenarios.svg",
];

#[test]
fn run_writes_all_outputs() {
    let out = TempDir::new().unwrap();
    let stdout = run(out.path(), &[]);
    for name in OUTPUTS {
        assert!(out.path().join(name).exists(), "missing {}", name);
    }
    assert!(stdout.contains("Depletion (mean, 350 x10^9 m^3): 2037"));

    let v: Value = serde_json::from_slice(&fs::read(out.path().join("outlook.json")).unwrap()).unwrap();
    assert_eq!(v["tool"], "aquifer-outlook");
    assert_eq!(v["scenarios"][1]["depletion_year"], 2037);

    let svg = fs::read_to_string(out.path().join("storage_scenarios.svg"))
        .unwrap()
        .to_lowercase();
    assert!(svg.contains("<svg"));
    let elements: Vec<&str> = svg.split('<').collect();
    // depleted band is filled in the low-scenario color
    assert!(
        elements
            .iter()
            .any(|e| e.starts_with("rect") && e.contains("#d6604d")),
        "missing depleted band"
    );
    for color in ["#d6604d", "#2166ac", "#1b7837"] {
        let lines = elements
            .iter()
            .filter(|e| {
                e.starts_with("polyline") && e.contains(color) && e.contains("stroke-width=\"2\"")
            })
            .count();
        assert_eq!(lines, 1, "scenario line {}", color);
    }
}

#[test]
fn outputs_are_deterministic() {
    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();
    run(out1.path(), &[]);
    run(out2.path(), &[]);
    for name in OUTPUTS {
        let a = fs::read(out1.path().join(name)).unwrap();
        let b = fs::read(out2.path().join(name)).unwrap();
        assert_eq!(a, b, "mismatch in {}", name);
    }
}

#[test]
fn integrator_flag_reaches_report() {
    let out = TempDir::new().unwrap();
    run(out.path(), &["--integrator", "adaptive-simpson"]);
    let v: Value = serde_json::from_slice(&fs::read(out.path().join("outlook.json")).unwrap()).unwrap();
    assert_eq!(v["integrator"], "adaptive-simpson");
    assert_eq!(v["scenarios"][0]["depletion_year"], 2024);
}

#[test]
fn no_output_flags_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("never");
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.args(["run", "--out", out.to_str().unwrap()]);
    cmd.assert().success();
    assert!(!out.exists());
}

#[test]
fn invalid_config_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    let cfg = tmp.path().join("bad.json");
    fs::write(&cfg, r#"{ "year_step": -1 }"#).unwrap();
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.args(["validate", "--config", cfg.to_str().unwrap()]);
    cmd.assert().failure();
}

#[test]
fn config_show_prints_effective_config() {
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.args(["config", "show"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let v: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(v["scenario_initial_storage"]["low"], 190.0);
    assert_eq!(v["integrator"], "closed-form");
}

fn run(out: &Path, extra: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("aquifer-outlook").unwrap();
    cmd.args([
        "run",
        "--out",
        out.to_str().unwrap(),
        "--json",
        "--tsv",
        "--plots",
    ]);
    cmd.args(extra);
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
