//! Integration tests for the stride binary.
//!
//! These tests verify end-to-end behavior including:
//! - Report generation for the built-in sample batch
//! - JSONL feed input
//! - Unknown-code skipping

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stride"))
}

/// Helper to write a JSONL feed file
fn write_feed(dir: &TempDir, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("feed.jsonl");
    fs::write(&path, lines.join("\n")).expect("Failed to write feed");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout statistics from raw sensor packages",
        ));
}

#[test]
fn test_sample_batch_reports() {
    cli()
        .arg("report")
        .arg("--sample")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Training type: Swimming; Duration: 1.000 h.; Distance: 1.000 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000 kcal.",
        ))
        .stdout(predicate::str::contains(
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 797.805 kcal.",
        ))
        .stdout(predicate::str::contains(
            "Training type: Walking; Duration: 1.000 h.; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 349.252 kcal.",
        ));
}

#[test]
fn test_reads_feed_from_input_file() {
    let temp_dir = setup_test_dir();
    let feed = write_feed(
        &temp_dir,
        &[r#"{"workout_type": "RUN", "data": [15000, 1, 75]}"#],
    );

    cli()
        .arg("report")
        .arg("--input")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Running"))
        .stdout(predicate::str::contains("Calories burned: 797.805 kcal."));
}

#[test]
fn test_unknown_code_is_skipped() {
    let temp_dir = setup_test_dir();
    let feed = write_feed(
        &temp_dir,
        &[
            r#"{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}"#,
            r#"{"workout_type": "WL", "data": [3000, 2.112, 75.8, 180.1]}"#,
            r#"{"workout_type": "RUN", "data": [15000, 1, 75]}"#,
        ],
    );

    cli()
        .arg("report")
        .arg("--input")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type:").count(2))
        .stdout(predicate::str::contains("Training type: Swimming"))
        .stdout(predicate::str::contains("Training type: Running"));
}

#[test]
fn test_non_positive_duration_fails_the_batch() {
    let temp_dir = setup_test_dir();
    let feed = write_feed(
        &temp_dir,
        &[r#"{"workout_type": "RUN", "data": [15000, 0, 75]}"#],
    );

    cli()
        .arg("report")
        .arg("--input")
        .arg(&feed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidParameters"));
}

#[test]
fn test_missing_feed_file_fails() {
    let temp_dir = setup_test_dir();
    let missing = temp_dir.path().join("nope.jsonl");

    cli()
        .arg("report")
        .arg("--input")
        .arg(&missing)
        .assert()
        .failure();
}

#[test]
fn test_default_command_is_report() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Swimming"));
}
