//! Integration tests for the codelab binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn codelab() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codelab"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn analyze_sample_program_as_json() {
    let output = codelab()
        .args(["analyze", "--format", "json", "--delay-ms", "0"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json: Value = serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["analysis"]["score"], 75);
    assert_eq!(json["analysis"]["issues"].as_array().unwrap().len(), 2);
    assert_eq!(json["analysis"]["suggestions"].as_array().unwrap().len(), 3);
}

#[test]
fn analyze_reads_stdin() {
    let output = codelab()
        .args(["analyze", "-", "--delay-ms", "0"])
        .write_stdin("print('hi')\n")
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Score: 75/100"));
    assert!(stdout.contains("[warning] line 2"));
}

#[test]
fn analyze_timeout_exits_non_zero() {
    let output = codelab()
        .args([
            "analyze",
            "--format",
            "json",
            "--delay-ms",
            "2000",
            "--timeout-ms",
            "50",
        ])
        .assert()
        .failure()
        .get_output()
        .clone();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "failed");
    assert!(json["error"].as_str().unwrap().contains("timed out"));
}

#[test]
fn analyze_with_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("lab.toml");
    fs::write(&config, "[engine]\ndelay_ms = 0\nmax_source_bytes = 4\n").unwrap();

    codelab()
        .args(["analyze", "--config", config.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn run_prints_execution_output() {
    let output = codelab()
        .arg("run")
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Output: 5 (fibonacci of 5)"
    );
}

#[test]
fn catalog_lists_tutorials() {
    let output = codelab()
        .args(["catalog", "tutorials"])
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("JavaScript Fundamentals"));
    assert!(stdout.contains("Locked"));
}

#[test]
fn catalog_shows_learner_stats() {
    let output = codelab()
        .args(["catalog", "stats"])
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Current Streak"));
    assert!(stdout.contains("12/50"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();

    codelab()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();
    assert!(temp_dir.path().join(".codelab.toml").exists());

    codelab()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure();

    codelab()
        .args(["init", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
}
