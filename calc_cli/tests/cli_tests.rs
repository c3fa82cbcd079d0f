//! Integration tests for the beamcalc binary.
//!
//! These run the real executable with a clean environment so that
//! `BEAMCALC_CONFIG` and the override variables of the host do not leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("beamcalc"));
    for var in [
        "BEAMCALC_CONFIG",
        "ALLOWABLE_STRESS",
        "ALLOWABLE_DEFLECTION_RATIO",
        "HOST",
        "PORT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn calculate_json(args: &[&str]) -> serde_json::Value {
    let output = cli()
        .arg("calculate")
        .args(args)
        .arg("--json")
        .output()
        .expect("Failed to run beamcalc");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("single-span steel beam"))
        .stdout(predicate::str::contains("calculate"))
        .stdout(predicate::str::contains("profiles"));
}

#[test]
fn test_calculate_simply_supported_json() {
    let json = calculate_json(&[
        "--length", "5", "--support", "hinged", "--force", "100", "--position", "0.4", "--profile", "I-beam_20B1",
    ]);

    assert_eq!(json["reactions"]["R_a"], 60.0);
    assert_eq!(json["reactions"]["R_b"], 40.0);
    assert!(json["reactions"].get("M_a").is_none());
    assert_eq!(json["max_moment"], 120.0);
    assert_eq!(json["is_strength_sufficient"], false);
    assert_eq!(json["input_data"]["support_type"], "hinged");
    assert_eq!(json["report_sections"].as_array().unwrap().len(), 4);
}

#[test]
fn test_calculate_cantilever_json() {
    let json = calculate_json(&[
        "--length", "4", "--support", "cantilever", "--force", "50", "--position", "1.0", "--profile", "I-beam_20B1",
    ]);

    assert_eq!(json["reactions"]["R_a"], 50.0);
    assert_eq!(json["reactions"]["M_a"], 200.0);
    assert_eq!(json["max_moment"], 200.0);
    assert_eq!(json["max_deflection"], 0.0);
    assert_eq!(json["is_stiffness_sufficient"], true);
}

#[test]
fn test_calculate_text_report() {
    cli()
        .args([
            "calculate", "--length", "3", "--support", "fixed", "--force", "10", "--profile", "I-beam_20B1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineering Strength Calculator"))
        .stdout(predicate::str::contains("Support Reactions"))
        .stdout(predicate::str::contains("Support type: fixed support"))
        .stdout(predicate::str::contains("RESULT: PASS"));
}

#[test]
fn test_unknown_profile_fails() {
    cli()
        .args([
            "calculate", "--length", "5", "--force", "100", "--profile", "I-beam_99B9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'I-beam_99B9' not found"))
        .stderr(predicate::str::contains("ProfileNotFound"));
}

#[test]
fn test_invalid_input_fails() {
    cli()
        .args([
            "calculate", "--length", "0", "--force", "100", "--profile", "I-beam_20B1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidInput"));
}

#[test]
fn test_unknown_support_rejected() {
    cli()
        .args([
            "calculate", "--length", "5", "--support", "roller", "--force", "100", "--profile", "I-beam_20B1",
        ])
        .assert()
        .failure();
}

#[test]
fn test_profiles_list() {
    cli()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("I-beam_10B1"))
        .stdout(predicate::str::contains("I-beam_60B1"))
        .stdout(predicate::str::contains("GOST 26020-83"));
}

#[test]
fn test_profiles_search() {
    let output = cli()
        .args(["profiles", "--search", "40", "--json"])
        .output()
        .expect("Failed to run beamcalc");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = json["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["key"], "I-beam_40B1");
}

#[test]
fn test_profiles_search_no_match() {
    cli()
        .args(["profiles", "--search", "HEB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles found"));
}

#[test]
fn test_single_profile() {
    cli()
        .args(["profile", "i-beam_30b1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I-beam 30B1"))
        .stdout(predicate::str::contains("Wx = 422 cm³"));
}

#[test]
fn test_config_file_changes_verdict() {
    let args = [
        "calculate", "--length", "1", "--support", "cantilever", "--force", "1", "--position", "0.5",
        "--profile", "I-beam_20B1", "--json",
    ];

    let output = cli().args(args).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_strength_sufficient"], true);

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("beamcalc.toml");
    fs::write(&config_path, "[criteria]\nallowable_stress_mpa = 2.0\n").unwrap();

    let output = cli().arg("--config").arg(&config_path).args(args).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_strength_sufficient"], false);
}

#[test]
fn test_env_override_changes_verdict() {
    let output = cli()
        .env("ALLOWABLE_STRESS", "2.0")
        .args([
            "calculate", "--length", "1", "--support", "cantilever", "--force", "1", "--position", "0.5",
            "--profile", "I-beam_20B1", "--json",
        ])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_strength_sufficient"], false);
}

#[test]
fn test_missing_config_file_fails() {
    cli()
        .args(["--config", "/nonexistent/beamcalc.toml", "profiles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
