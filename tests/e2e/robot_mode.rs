//! Robot-mode end-to-end tests.

use predicates::prelude::*;

use crate::common::cli::{emucam, parse_json};
use crate::common::fixtures::{FakeHost, TestConfig, closed_port};
use crate::common::init_test_logging;

#[test]
fn robot_dry_run_negotiate_outputs_snapshot() {
    init_test_logging();
    let output = emucam()
        .args([
            "--robot",
            "negotiate",
            "--dry-run",
            "--device",
            "front",
            "--prop",
            "aicVM.vbox_graph_mode=480x640-16",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["state"]["state"], "ready");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["capabilities"]["facing"], "front");
    assert_eq!(json["capabilities"]["orientation"], 90);
    assert_eq!(json["parameters"]["preview-size"], "640x480");
    assert_eq!(json["parameters"]["picture-size-values"], "640x480,320x240,176x144");
    assert!(json["flattened"].as_str().unwrap().contains("prop-orientation=90"));
}

#[test]
fn robot_negotiate_against_fake_host() {
    init_test_logging();
    let host = FakeHost::start();
    let port = host.port().to_string();

    let output = emucam()
        .args(["--format=json-compact", "negotiate", "--port", &port])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1, "expected compact JSON");
    let json = parse_json(&output.stdout);
    assert_eq!(json["capabilities"]["facing"], "back");
    assert_eq!(json["connection"]["port"], host.port());
}

#[test]
fn robot_device_failure_reports_error() {
    init_test_logging();
    let port = closed_port().to_string();

    let output = emucam()
        .args(["--robot", "negotiate", "--port", &port])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no parameters may be printed");

    let json = parse_json(&output.stderr);
    assert_eq!(json["error"], true);
    assert_eq!(json["recoverable"], true);
    assert!(json["suggestion"].is_string());
}

#[test]
fn robot_strict_facing_rejects_unknown_device() {
    init_test_logging();
    emucam()
        .args([
            "--robot",
            "negotiate",
            "--dry-run",
            "--strict-facing",
            "--device",
            "webcam0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown camera facing"));
}

#[test]
fn robot_orientation_command() {
    init_test_logging();
    let output = emucam()
        .args(["--robot", "orientation", "garbage"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["parsed"], false);
    assert_eq!(json["orientation"], 0);
}

#[test]
fn robot_config_reads_file() {
    init_test_logging();
    let fixture = TestConfig::write("[camera]\ndevice = \"front\"\nport = 6001\n");

    let output = emucam()
        .args(["--robot", "--config"])
        .arg(fixture.path())
        .arg("config")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["config"]["camera"]["device"], "front");
    assert_eq!(json["config"]["camera"]["port"], 6001);
}

#[test]
fn robot_missing_config_is_error() {
    init_test_logging();
    emucam()
        .args(["--robot", "--config", "/nonexistent/emucam.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn robot_version_outputs_json() {
    init_test_logging();
    let output = emucam().args(["version", "--format=json"]).output().unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert!(json.get("version").is_some());
}

#[test]
fn robot_accepts_no_color_env_values() {
    init_test_logging();
    for value in ["1", "true", "yes", "0", ""] {
        let output = emucam()
            .env("NO_COLOR", value)
            .args(["--robot", "orientation", "640x480-32"])
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "NO_COLOR={value:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(parse_json(&output.stdout)["orientation"], 0);
    }
}
