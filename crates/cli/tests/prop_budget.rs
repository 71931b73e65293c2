use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn configs() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs")
}

fn prop_budget() -> Command {
    let mut cmd = Command::cargo_bin("prop_budget").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn text_summary_for_bundled_request() {
    prop_budget()
        .args(["compute", "--request"])
        .arg(configs().join("requests/geo_comsat.yaml"))
        .arg("--thrusters")
        .arg(configs().join("thrusters.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial mass   : 5121.1 kg"))
        .stdout(predicate::str::contains("Feasible       : yes"))
        .stdout(predicate::str::contains("hydrazine"));
}

#[test]
fn json_output_is_stamped_and_complete() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out/budget.json");

    prop_budget()
        .args(["compute", "--format", "json", "--request"])
        .arg(configs().join("requests/single_burn.toml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert!(value["generated_at"].as_str().unwrap().ends_with('Z'));
    assert!((value["initial_mass_kg"].as_f64().unwrap() - 3_687.604).abs() < 1e-3);
    assert_eq!(value["feasible"], false);
    assert_eq!(value["launch_option"]["id"], "falcon9-gto-3500");
    assert_eq!(value["maneuvers"][0]["xenon_kg"], Value::Null);
    assert!(value["maneuvers"][0]["fuel_kg"].is_f64());
    assert_eq!(value["tank_constraints_violated"], serde_json::json!([]));
}

#[test]
fn csv_output_reads_back() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("budget.csv");

    prop_budget()
        .args(["compute", "--format", "csv", "--request"])
        .arg(configs().join("requests/geo_comsat.yaml"))
        .arg("--launch-options")
        .arg(configs().join("launch_options"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers = reader.headers().unwrap().clone();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    let occurrences = headers.iter().position(|h| h == "occurrences").unwrap();
    let ox = headers.iter().position(|h| h == "ox_kg").unwrap();
    assert_eq!(&rows[1][occurrences], "15");
    assert!(!rows[0][ox].is_empty());
    assert_eq!(&rows[1][ox], "");
}

#[test]
fn unknown_thruster_exits_with_input_error() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("request.yaml");
    fs::write(
        &request,
        r#"
dry_mass_kg: 1000.0
launch_option_id: h3-gto
maneuvers:
  - name: Transfer
    delta_v_mps: 1500.0
    thruster_id: missing-engine
tanks:
  hydrazine_kg: 1000.0
  oxidizer_kg: 1000.0
  xenon_kg: 0.0
"#,
    )
    .unwrap();

    prop_budget()
        .args(["compute", "--request"])
        .arg(&request)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing-engine"));
}

#[test]
fn invalid_request_exits_with_input_error() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(
        &request,
        r#"{"dry_mass_kg": 1000.0, "launch_option_id": "h3-gto", "maneuvers": [],
            "tanks": {"hydrazine_kg": 0.0, "oxidizer_kg": 0.0, "xenon_kg": 0.0}}"#,
    )
    .unwrap();

    prop_budget()
        .args(["compute", "--request"])
        .arg(&request)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("At least one maneuver is required"));
}

#[test]
fn unreadable_request_exits_with_input_error() {
    let dir = tempdir().unwrap();
    prop_budget()
        .args(["compute", "--request"])
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("loading request"));
}

#[test]
fn unsolvable_budget_exits_with_internal_error() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("request.toml");
    fs::write(
        &request,
        r#"
dry_mass_kg = 1000.0
launch_option_id = "h3-gto"

[[maneuvers]]
name = "Transfer"
delta_v_mps = 1500.0
thruster_id = "rea-22n-mono"

[tanks]
hydrazine_kg = 1000.0
oxidizer_kg = 0.0
xenon_kg = 0.0

[solver]
max_expansions = 0
"#,
    )
    .unwrap();

    prop_budget()
        .args(["compute", "--request"])
        .arg(&request)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not be solved"));
}

#[test]
fn zero_solver_tolerance_exits_with_input_error() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("request.yaml");
    fs::write(
        &request,
        r#"
dry_mass_kg: 1000.0
launch_option_id: h3-gto
maneuvers:
  - name: Transfer
    delta_v_mps: 1500.0
    thruster_id: rea-22n-mono
tanks:
  hydrazine_kg: 1000.0
  oxidizer_kg: 0.0
  xenon_kg: 0.0
solver:
  tolerance_kg: 0.0
"#,
    )
    .unwrap();

    prop_budget()
        .args(["compute", "--request"])
        .arg(&request)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid solver settings"));
}

#[test]
fn thruster_listing_as_json() {
    let output = prop_budget()
        .args(["thrusters", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "rea-22n-mono");
    assert_eq!(list[0]["mixture_ratio_ox_to_fuel"], Value::Null);
    assert_eq!(list[1]["mixture_ratio_ox_to_fuel"], 0.8);
}

#[test]
fn launch_option_listing_as_text() {
    prop_budget()
        .arg("launch-options")
        .assert()
        .success()
        .stdout(predicate::str::contains("falcon9-gto-3500"))
        .stdout(predicate::str::contains("ariane6-gto-64"));
}

#[test]
fn biprop_catalog_entry_without_ratio_is_rejected() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("thrusters.yaml");
    fs::write(
        &catalog,
        r#"
- id: bad
  name: Bad LAE
  thruster_type: chemical_biprop
  isp_s: 320.0
"#,
    )
    .unwrap();

    prop_budget()
        .args(["thrusters", "--catalog"])
        .arg(&catalog)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Mixture ratio is required for bipropellant thrusters",
        ));
}
