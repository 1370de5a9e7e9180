//! End-to-end tests for the spanline binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

// "garbage!!!" has no whitespace separator, so it can never match an event
// line and shows up in the report as skipped.
const SOURCE: &str = "#Phase A\n2024-01-01 Kickoff\ngarbage!!!\n2024-01-03~2024-01-08 [[Sprint 1|Sprint]]\n#Phase B\n2024-01-11 Review\n";

fn timeline_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn events_json_is_the_default_format() {
    let file = timeline_file(SOURCE);
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path());

    let output_pred = predicate::str::contains("\"name\": \"Kickoff\"")
        .and(predicate::str::contains("\"group\": \"Phase A\""))
        .and(predicate::str::contains("\"start\": \"2024-01-01\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn report_format_accounts_for_skipped_lines() {
    let file = timeline_file(SOURCE);
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path()).arg("--format").arg("report");

    let output_pred = predicate::str::contains("\"kind\": \"skipped\"")
        .and(predicate::str::contains("\"kind\": \"group-header\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn items_json_assigns_synthetic_ids() {
    let file = timeline_file(SOURCE);
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path()).arg("--format").arg("items-json");

    let output_pred = predicate::str::contains("\"id\": 0")
        .and(predicate::str::contains("\"id\": 2"))
        .and(predicate::str::contains("\"start\": \"2024-01-03T00:00:00\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn window_json_carries_the_padded_window() {
    let file = timeline_file(SOURCE);
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path()).arg("--format").arg("window-json");

    // Data range 2024-01-01..2024-01-11 padded by 2 days on each side.
    let output_pred = predicate::str::contains("2023-12-30T00:00:00")
        .and(predicate::str::contains("2024-01-13T00:00:00"))
        .and(predicate::str::contains("\"show_current_time\": false"))
        .and(predicate::str::contains("\"zoom_min_secs\": 3600"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn unknown_format_fails_with_a_hint() {
    let file = timeline_file(SOURCE);
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path()).arg("--format").arg("yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Available formats"));
}

#[test]
fn missing_file_fails_cleanly() {
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg("no/such/file.timeline");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn config_file_overrides_window_math() {
    let file = timeline_file("note without dates\n");
    let config = timeline_file("[fallback]\nreference_date = \"2030-06-15\"\nwindow_days = 2\n");

    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path())
        .arg("--format")
        .arg("window-json")
        .arg("--config")
        .arg(config.path());

    let output_pred = predicate::str::contains("2030-06-14T00:00:00")
        .and(predicate::str::contains("2030-06-16T00:00:00"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn empty_file_emits_an_empty_event_list() {
    let file = timeline_file("");
    let mut cmd = cargo_bin_cmd!("spanline");
    cmd.arg(file.path());

    cmd.assert().success().stdout(predicate::str::contains("[]"));
}
