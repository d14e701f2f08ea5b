// ABOUTME: Integration tests for the ironlog-analyze binary
// ABOUTME: Runs the CLI against temp files and stdin and checks the JSON it prints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const NOW: &str = "2025-05-01T18:00:00Z";

const RECORDS: &str = r#"[
    {"category": "Bench Press", "load": 185.0, "set_count": 3, "rep_count": 8, "occurred_at": "2025-04-30T18:00:00Z"},
    {"exercise_name": "Pull-ups", "sets": 3, "reps": 10, "date": "2025-05-01T07:30:00Z"}
]"#;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ironlog-analyze"));
    command
        .env("RUST_LOG", "error")
        .env_remove("IRONLOG_CATALOG_PATH")
        .env_remove("IRONLOG_ANALYSIS_WINDOW_DAYS");
    command
}

/// Run the CLI with `stdin` piped in, returning (exit code, stdout, stderr)
fn run_cli(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = cli()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_help_describes_flags() {
    let (code, stdout, _) = run_cli(&["--help"], "");

    assert_eq!(code, 0);
    for flag in ["--input", "--window-days", "--catalog", "--now", "--stats", "--compact"] {
        assert!(stdout.contains(flag), "help should mention {flag}");
    }
}

#[test]
fn test_analyze_from_stdin() {
    let (code, stdout, stderr) = run_cli(&["--now", NOW], RECORDS);
    assert_eq!(code, 0, "stderr: {stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    let report = &output["report"];

    assert_eq!(report["records_analyzed"], 2);
    assert_eq!(report["push_pull_ratio"], 1.0);
    assert_eq!(report["push_pull_balance"], "balanced");
    assert_eq!(report["region_status"]["back"]["training_count"], 1);
    assert_eq!(report["analyzed_at"], NOW);
    assert!(output.get("stats").is_none());
}

#[test]
fn test_analyze_file_with_stats_and_window() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("workouts.json");
    fs::write(&input, RECORDS).unwrap();

    let (code, stdout, stderr) = run_cli(
        &[
            "--input",
            input.to_str().unwrap(),
            "--now",
            NOW,
            "--window-days",
            "14",
            "--stats",
            "--compact",
        ],
        "",
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout.trim().lines().count(), 1);

    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["report"]["window_days"], 14);
    assert_eq!(output["stats"]["total_workouts"], 2);
    assert_eq!(output["stats"]["training_days"], 2);
    assert_eq!(output["stats"]["current_streak"], 2);
}

#[test]
fn test_custom_catalog_flag() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(&catalog, r#"{"Sled Push": ["legs"]}"#).unwrap();

    let records = r#"[{"category": "Sled Push", "occurred_at": "2025-05-01T10:00:00Z"}]"#;
    let (code, stdout, stderr) = run_cli(
        &["--catalog", catalog.to_str().unwrap(), "--now", NOW],
        records,
    );
    assert_eq!(code, 0, "stderr: {stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["report"]["region_status"]["legs"]["training_count"], 1);
    assert_eq!(output["report"]["unclassified_records"], 0);
}

#[test]
fn test_empty_input_prints_onboarding_message() {
    let (code, stdout, _) = run_cli(&["--now", NOW], "[]");

    assert_eq!(code, 0);
    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["status"], "insufficient_data");
    assert!(output["message"].as_str().unwrap().contains("Log"));
}

#[test]
fn test_zero_window_still_reports() {
    let (code, stdout, stderr) = run_cli(&["--now", NOW, "--window-days", "0"], RECORDS);
    assert_eq!(code, 0, "stderr: {stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    let report = &output["report"];
    assert_eq!(report["window_days"], 0);
    assert_eq!(report["region_status"]["chest"]["score_breakdown"]["volume"], 40.0);
    assert!(report["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|warning| warning.as_str().unwrap().starts_with("Possible overtraining of chest")));
}

#[test]
fn test_null_load_is_treated_as_bodyweight() {
    let records = r#"[
        {"category": "Pull-ups", "load": null, "sets": 3, "reps": 10, "occurred_at": "2025-05-01T07:30:00Z"},
        {"exercise_name": "Dips", "weight": null, "date": "2025-04-30T07:30:00Z"}
    ]"#;
    let (code, stdout, stderr) = run_cli(&["--now", NOW], records);
    assert_eq!(code, 0, "stderr: {stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    let report = &output["report"];
    assert_eq!(report["records_analyzed"], 2);
    assert_eq!(report["region_status"]["back"]["training_count"], 1);
    assert_eq!(report["region_status"]["back"]["total_volume"], 0.0);
}

#[test]
fn test_malformed_input_fails_with_data_error() {
    let (code, _, stderr) = run_cli(&[], "{not json");

    assert_eq!(code, 65);
    assert!(stderr.contains("The data format is invalid"));
    assert!(stderr.contains("JSON array of workout records"));
}

#[test]
fn test_missing_input_file_fails_with_no_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let (code, _, _) = run_cli(&["--input", missing.to_str().unwrap()], "");
    assert_eq!(code, 66);
}
