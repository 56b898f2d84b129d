//! Integration tests for the schedule-maker binary.
//!
//! These tests verify end-to-end behavior including:
//! - Page generation from a config file and learning objectives
//! - No-class days and evening exams in the output
//! - Fatal errors leaving no output behind
//! - Plan and config commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TERM_CONFIG: &str = r#"
term = "202010"
start_date = "2019-12-02"
end_date = "2019-12-12"
meeting_days = ["Mon", "Thu"]
number_of_sessions = 3
dates_to_skip = [{ date = "2019-12-05", message = "Holiday" }]
evening_exams = [{ date = "2019-12-09" }]

[course]
number = "CSSE 220"
title = "Object-Oriented Software Development"
term_label = "Winter term, 2019-20"
"#;

const OBJECTIVES: &str = "\
# Learning objectives
!!! Reminder: update before week 2

Session 1: Welcome / Setup
- Install the tools (Python and PyCharm)

!!! BEGIN COMMENT
Session 99: Removed session
!!! END COMMENT

Session 2: Test 1 review
- Test 1. Sessions 1 and 2

Session 3: Loops
- Counting loops
- Calling f((x))
";

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("schedule-maker"))
}

/// Write config and objectives into `dir`, returning (config, input, output) paths
fn write_fixture(dir: &Path, objectives: &str) -> (PathBuf, PathBuf, PathBuf) {
    let config = dir.join("term.toml");
    let input = dir.join("objectives.md");
    let output = dir.join("site").join("index.html");
    fs::write(&config, TERM_CONFIG).expect("write config");
    fs::write(&input, objectives).expect("write objectives");
    (config, input, output)
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course schedule page generator"));
}

#[test]
fn test_build_writes_schedule_page() {
    let temp_dir = setup_test_dir();
    let (config, input, output) = write_fixture(temp_dir.path(), OBJECTIVES);

    cli()
        .arg("build")
        .arg("--config")
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule for term 202010 written"));

    let html = fs::read_to_string(&output).expect("Failed to read page");
    assert!(html.starts_with("<!DOCTYPE HTML>"));
    assert!(html.contains("<span class=\"course_number\"> CSSE 220</span>"));
    assert!(html.contains("<th class=schedule_caption> Monday </th>"));
    assert!(html.contains("<th class=schedule_caption> Thursday </th>"));
    assert!(html.contains("<th colspan=2>"));

    // sessions 1..3 on Dec 2, 9, 12; Dec 5 is a holiday
    assert!(html.contains("<span class=\"session_date\">(December 2)</span>"));
    assert!(html.contains("<div class=\"no_class_title\">Holiday</div>"));
    assert!(html.contains("<div class=\"session_date\">December 5</div>"));
    assert!(html.contains("<span class=\"session_number\">3</span>"));
    assert!(html.contains("Sessions/Session03/index.html"));
    assert!(!html.contains("Removed session"));
    assert!(!html.contains("Reminder"));

    // evening exam notice on December 9 (a Monday)
    assert!(html.contains("The regular in-class session on Monday"));

    // topics are hidden by default
    assert!(!html.contains("session_topics"));
}

#[test]
fn test_build_with_topics() {
    let temp_dir = setup_test_dir();
    let (config, input, output) = write_fixture(temp_dir.path(), OBJECTIVES);

    cli()
        .arg("build")
        .arg("--config")
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--show-topics")
        .assert()
        .success();

    let html = fs::read_to_string(&output).expect("Failed to read page");
    assert!(html.contains("<div class=session_topics>"));
    assert!(html.contains("<span class=parenthetical>"));
    assert!(html.contains("topics collapsibleList exam"));
    assert!(html.contains("Calling f(x)"));
}

#[test]
fn test_build_is_deterministic() {
    let temp_dir = setup_test_dir();
    let (config, input, output) = write_fixture(temp_dir.path(), OBJECTIVES);

    let mut pages = Vec::new();
    for _ in 0..2 {
        cli()
            .arg("--config")
            .arg(&config)
            .arg("build")
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success();
        pages.push(fs::read(&output).expect("Failed to read page"));
    }
    assert_eq!(pages[0], pages[1]);
}

#[test]
fn test_session_count_mismatch_fails() {
    let temp_dir = setup_test_dir();
    let objectives = "Session 1: Only one\n- a\n";
    let (config, input, output) = write_fixture(temp_dir.path(), objectives);

    cli()
        .arg("build")
        .arg("--config")
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("SessionCountMismatch"));

    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = setup_test_dir();
    let (config, _, output) = write_fixture(temp_dir.path(), OBJECTIVES);

    cli()
        .arg("build")
        .arg("--config")
        .arg(&config)
        .arg("--input")
        .arg(temp_dir.path().join("nope.md"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("MissingFile"));

    assert!(!output.exists());
}

#[test]
fn test_plan_lists_sessions() {
    let temp_dir = setup_test_dir();
    let (config, input, _) = write_fixture(temp_dir.path(), OBJECTIVES);

    cli()
        .arg("plan")
        .arg("--config")
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("December 5"))
        .stdout(predicate::str::contains("Holiday"))
        .stdout(predicate::str::contains("[evening exam]"))
        .stdout(predicate::str::contains("Welcome / Setup"));
}

#[test]
fn test_plan_json() {
    let temp_dir = setup_test_dir();
    let (config, input, _) = write_fixture(temp_dir.path(), OBJECTIVES);

    let assert = cli()
        .arg("plan")
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let sessions: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let sessions = sessions.as_array().expect("array of sessions");

    assert_eq!(sessions.len(), 4);
    assert_eq!(sessions[0]["number"], 1);
    assert_eq!(sessions[1]["type"], "no_class");
    assert_eq!(sessions[1]["date"], "2019-12-05");
    assert_eq!(sessions[2]["kind"], "evening_exam");
    assert_eq!(sessions[3]["number"], 3);
}

#[test]
fn test_config_prints_toml() {
    let temp_dir = setup_test_dir();
    let (config, _, _) = write_fixture(temp_dir.path(), OBJECTIVES);

    cli()
        .arg("config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("term = \"202010\""))
        .stdout(predicate::str::contains("number_of_sessions = 3"));
}

#[test]
fn test_config_write_roundtrip() {
    let temp_dir = setup_test_dir();
    let (config, input, _) = write_fixture(temp_dir.path(), OBJECTIVES);
    let copy = temp_dir.path().join("copy").join("term.toml");

    cli()
        .arg("config")
        .arg("--config")
        .arg(&config)
        .arg("--write")
        .arg(&copy)
        .assert()
        .success();

    cli()
        .arg("plan")
        .arg("--config")
        .arg(&copy)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Holiday"));
}
