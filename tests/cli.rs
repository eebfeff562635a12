use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use cloud_cost_optimizer::ProjectProfile;

/// Command-line tests for the `cost-ctl` binary.
///
/// Each test runs in its own temporary directory with HOME pointed at it, so
/// no user configuration leaks in.

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/profiles")
        .join(name)
}

fn cost_ctl(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cost-ctl").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_example_prints_loadable_profile() {
    let dir = TempDir::new().unwrap();
    let output = cost_ctl(&dir)
        .arg("example")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let profile: ProjectProfile = serde_json::from_slice(&output).unwrap();
    assert_eq!(profile, ProjectProfile::example());
}

#[test]
fn test_example_toml_feeds_optimize() {
    let dir = TempDir::new().unwrap();
    let profile_path = dir.path().join("profile.toml");

    cost_ctl(&dir)
        .args(["example", "--format", "toml", "--output"])
        .arg(&profile_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let report = stdout_json(
        cost_ctl(&dir)
            .arg("optimize")
            .arg(&profile_path)
            .args(["--format", "json"]),
    );
    assert_eq!(report["project"], "Food Delivery App");
    assert_eq!(report["status"], "Over Budget");
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 11);
    assert!(report.get("insights").is_none());
}

#[test]
fn test_optimize_summary_with_roadmap() {
    let dir = TempDir::new().unwrap();
    cost_ctl(&dir)
        .arg("optimize")
        .arg(fixture("food_delivery.json"))
        .args(["--format", "summary", "--roadmap", "-n", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cloud Cost Optimization Report: Food Delivery App",
        ))
        .stdout(predicate::str::contains("Number of Recommendations: 8"))
        .stdout(predicate::str::contains("Implementation Roadmap:"));
}

#[test]
fn test_optimize_table_output() {
    let dir = TempDir::new().unwrap();
    cost_ctl(&dir)
        .arg("optimize")
        .arg(fixture("static_site.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("CLOUD COST OPTIMIZATION REPORT"))
        .stdout(predicate::str::contains("Within Budget"));
}

#[test]
fn test_optimize_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.yaml");

    cost_ctl(&dir)
        .arg("optimize")
        .arg(fixture("analytics_platform.toml"))
        .args(["--format", "yaml", "--exclude-high-risk", "--output"])
        .arg(&report_path)
        .assert()
        .success();

    let content = fs::read_to_string(&report_path).unwrap();
    assert!(content.contains("project: Analytics Platform"));
    assert!(!content.contains("risk: High"));
}

#[test]
fn test_recommendation_count_out_of_range() {
    let dir = TempDir::new().unwrap();
    cost_ctl(&dir)
        .arg("optimize")
        .arg(fixture("food_delivery.json"))
        .args(["-n", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("25"));
}

#[test]
fn test_missing_profile_is_an_error() {
    let dir = TempDir::new().unwrap();
    cost_ctl(&dir)
        .args(["optimize", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_unsupported_profile_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.ini");
    fs::write(&path, "project_name = x").unwrap();

    cost_ctl(&dir)
        .arg("estimate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported profile format: ini"));
}

#[test]
fn test_invalid_profile_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    let mut value = serde_json::to_value(ProjectProfile::example()).unwrap();
    value["traffic_pattern"] = serde_json::json!("random");
    fs::write(&path, value.to_string()).unwrap();

    cost_ctl(&dir)
        .arg("optimize")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_estimate_summary() {
    let dir = TempDir::new().unwrap();
    cost_ctl(&dir)
        .arg("estimate")
        .arg(fixture("food_delivery.json"))
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EC2: ₹56,000.00"))
        .stdout(predicate::str::contains("RDS: ₹40,600.00"));
}

#[test]
fn test_patterns_json() {
    let dir = TempDir::new().unwrap();
    let pattern = stdout_json(
        cost_ctl(&dir)
            .arg("patterns")
            .arg(fixture("food_delivery.json"))
            .args(["--format", "json"]),
    );
    assert_eq!(pattern["traffic_type"], "predictable-peaks");
    assert_eq!(pattern["scaling_need"], "auto-scale-required");
    assert_eq!(pattern["peak_hours"], serde_json::json!([12, 13, 19, 20, 21]));
}

#[test]
fn test_rules_listing_respects_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[optimizer]\nignore_rules = [\"COST-NET-002\"]\n",
    )
    .unwrap();

    let rules = stdout_json(
        cost_ctl(&dir)
            .args(["rules", "--json", "--config"])
            .arg(&config_path),
    );
    let rules = rules.as_array().unwrap();
    assert_eq!(rules.len(), 14);
    assert_eq!(rules[0]["code"], "COST-CMP-001");
    let vpc = rules.iter().find(|r| r["code"] == "COST-NET-002").unwrap();
    assert_eq!(vpc["ignored"], true);
    assert_eq!(vpc["domain"], "network");

    let report = stdout_json(
        cost_ctl(&dir)
            .arg("optimize")
            .arg(fixture("food_delivery.json"))
            .args(["--format", "json", "--config"])
            .arg(&config_path),
    );
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 10);
}

#[test]
fn test_local_config_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".costopt.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let estimate = stdout_json(cost_ctl(&dir).arg("estimate").arg(fixture("food_delivery.json")));
    assert_eq!(estimate["service_costs"]["EC2"], 56_000.0);
}

#[test]
fn test_bad_explicit_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "[optimizer]\nsimilarity_threshold = 7.0\n").unwrap();

    cost_ctl(&dir)
        .args(["rules", "--config"])
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("similarity_threshold"));
}

#[test]
fn test_llm_without_api_key_falls_back() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("llm.toml");
    fs::write(
        &config_path,
        "[generative]\napi_key_env = \"COST_CTL_CLI_TEST_UNSET_KEY\"\n",
    )
    .unwrap();

    let report = stdout_json(
        cost_ctl(&dir)
            .arg("optimize")
            .arg(fixture("food_delivery.json"))
            .args(["--llm", "--format", "json", "--config"])
            .arg(&config_path)
            .env_remove("COST_CTL_CLI_TEST_UNSET_KEY"),
    );
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 11);
}

#[test]
fn test_config_command_prints_defaults() {
    let dir = TempDir::new().unwrap();
    cost_ctl(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[optimizer]"))
        .stdout(predicate::str::contains("similarity_threshold = 0.6"));
}
