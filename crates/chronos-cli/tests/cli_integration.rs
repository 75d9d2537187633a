//! Integration tests for chronos-cli
//!
//! These tests drive the binary end-to-end. None of them talk to Jira: reports
//! read time entries from JSON files and config commands use temp directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENTRIES: &str = r#"[
    {"issue": "AA-1235", "summary": "Summary of the issue", "date": "2018-01-08", "week": 2, "hours": 3.0, "comment": "My Comment"},
    {"issue": "AA-1234", "summary": "Summary of the issue", "date": "2018-01-01", "week": 1, "hours": 1.0, "comment": "My Comment"},
    {"issue": "AA-1235", "summary": "Summary of the issue", "date": "2018-01-01", "week": 1, "hours": 2.0, "comment": "My Comment"}
]"#;

/// Get a Command for the chronos binary with a clean environment
fn chronos() -> Command {
    let mut cmd = Command::cargo_bin("chronos").unwrap();
    for var in [
        "CHRONOS_CONFIG",
        "CHRONOS_URL",
        "CHRONOS_MAIL",
        "CHRONOS_USERNAME",
        "CHRONOS_API_KEY",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_entries(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("entries.json");
    std::fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_cli_help() {
    chronos()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chronos"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_cli_version() {
    chronos()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chronos"));
}

// =============================================================================
// Report Command Tests
// =============================================================================

#[test]
fn test_report_brief_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), ENTRIES);

    chronos()
        .args(["report", "--brief", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout("Week [ 1]: 3.00\nWeek [ 2]: 3.00\n");
}

#[test]
fn test_report_full_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), ENTRIES);

    chronos()
        .args(["report", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Week  1"))
        .stdout(predicate::str::contains("Week  2"))
        .stdout(predicate::str::contains("\tAA-1234:   1.00 Summary of the issue\n"))
        .stdout(predicate::str::contains("\tTotal:     3.00\n"))
        .stdout(predicate::str::contains("My Comment").not());
}

#[test]
fn test_report_comments_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), ENTRIES);

    chronos()
        .args(["report", "--comments", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary of the issue // My Comment"));
}

#[test]
fn test_report_comments_from_config() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), ENTRIES);
    let config = dir.path().join("chronos.yaml");
    std::fs::write(
        &config,
        "jira:\n  url: https://jira.example.com\n  mail: me@example.com\n  apikey: key\n  username: me\nreport:\n  show_comments: true\n",
    )
    .unwrap();

    chronos()
        .args(["report", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("// My Comment"));
}

#[test]
fn test_report_issue_list() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), ENTRIES);

    chronos()
        .args(["report", "--issues", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "AA-1234: Summary of the issue\nAA-1235: Summary of the issue\n",
        ));
}

#[test]
fn test_report_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), "[]");

    chronos()
        .args(["report", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No time entries found."));
}

#[test]
fn test_report_empty_input_quiet() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), "[]");

    chronos()
        .args(["report", "--brief", "--quiet", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_report_json_commands() {
    let dir = TempDir::new().unwrap();
    let input = write_entries(dir.path(), ENTRIES);

    chronos()
        .args(["report", "--format", "json", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"new_week\""))
        .stdout(predicate::str::contains("\"type\": \"issue_summary_line\""));
}

#[test]
fn test_report_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    chronos()
        .args(["report", "--input"])
        .arg(dir.path().join("nope.json"))
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read time entries"));
}

#[test]
fn test_report_from_jira_without_config_fails() {
    let dir = TempDir::new().unwrap();

    chronos()
        .arg("report")
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("chronos config init"));
}

// =============================================================================
// Log Command Tests
// =============================================================================

#[test]
fn test_log_requires_time() {
    let dir = TempDir::new().unwrap();

    chronos()
        .args(["log", "--issue", "AA-1234"])
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn test_log_requires_issue() {
    chronos().args(["log", "--hours", "1"]).assert().failure();
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("chronos.yaml");

    chronos()
        .args(["config", "init", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example configuration"));
    assert!(config.exists());

    chronos()
        .args(["config", "show", "--format", "json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://myJira.atlassian.net"))
        .stdout(predicate::str::contains("\"value\": \"basic\""))
        .stdout(predicate::str::contains("****"))
        .stdout(predicate::str::contains("1234ABCD").not());
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("chronos.yaml");
    std::fs::write(&config, "jira: {}\n").unwrap();

    chronos()
        .args(["config", "init", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    chronos()
        .args(["config", "init", "--force", "--config"])
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn test_config_path() {
    chronos()
        .args(["config", "path", "--config", "/tmp/elsewhere/chronos.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/elsewhere/chronos.yaml"));
}

#[test]
fn test_config_show_with_command_line_credentials() {
    let dir = TempDir::new().unwrap();

    chronos()
        .args(["config", "show", "--format", "json"])
        .args(["--url", "https://jira.example.com"])
        .args(["--mail", "me@example.com"])
        .args(["--username", "me"])
        .args(["--api-key", "secret"])
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("https://jira.example.com"))
        .stdout(predicate::str::contains("secret").not());
}
