//! Integration tests for the tflag binary

use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::process::{self, Output, Stdio};
use tempfile::TempDir;

fn tflag() -> Command {
    Command::cargo_bin("tflag").unwrap()
}

#[test]
fn test_default_run_prints_flags_and_union() {
    tflag()
        .assert()
        .success()
        .code(0)
        .stdout("256\n8\n264\n")
        .stderr("");
}

#[test]
fn test_default_run_is_repeatable() {
    let first = tflag().output().unwrap();
    let second = tflag().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_third_line_is_or_of_first_two() {
    let output = tflag().output().unwrap();
    let values: Vec<u64> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[2], values[0] | values[1]);
}

#[test]
fn test_report_subcommand_matches_default() {
    tflag().arg("report").assert().success().stdout("256\n8\n264\n");
}

#[test]
fn test_report_hex() {
    tflag()
        .args(["report", "--format", "hex"])
        .assert()
        .success()
        .stdout("0x100\n0x8\n0x108\n");
}

#[test]
fn test_report_json() {
    tflag()
        .args(["report", "--format", "json"])
        .assert()
        .success()
        .stdout("{\"icanon\":256,\"echo\":8,\"flag\":264}\n");
}

#[test]
fn test_report_template() {
    tflag()
        .args(["report", "--template", "%04llu"])
        .assert()
        .success()
        .stdout("0256\n0008\n0264\n");
}

#[test]
fn test_bad_template_fails_without_stdout() {
    tflag()
        .args(["report", "--template", "%s"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("template"));
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("termflag.toml");
    fs::write(&config_path, "[output]\nformat = \"hex\"\n").unwrap();

    tflag()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("0x100\n0x8\n0x108\n");
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("termflag.toml");
    fs::write(&config_path, "[output]\nformat = \"octal\"\n").unwrap();

    tflag()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("termflag.toml"));
}

#[test]
fn test_missing_config_fails() {
    tflag()
        .args(["--config", "/nonexistent/termflag.toml"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_flags_listing() {
    tflag()
        .arg("flags")
        .assert()
        .success()
        .stdout("ICANON\t256\t0x100\nECHO\t8\t0x8\n");
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    tflag()
        .arg("-vv")
        .assert()
        .success()
        .stdout("256\n8\n264\n")
        .stderr(predicate::str::contains("computed flag union"));
}

#[test]
fn test_cli_help() {
    tflag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ICANON"));
}

#[test]
fn test_cli_version() {
    tflag()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    tflag()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tflag"));
}

#[test]
fn test_cli_invalid_command() {
    tflag().arg("invalid_command").assert().failure();
}

/// Run `tflag` with stdout connected to a pipe whose read end is already closed.
#[cfg(unix)]
fn run_with_closed_stdout(args: &[&str]) -> Output {
    let (reader, writer) = std::io::pipe().unwrap();
    drop(reader);
    process::Command::cargo_bin("tflag")
        .unwrap()
        .args(args)
        .stdout(Stdio::from(writer))
        .stderr(Stdio::piped())
        .output()
        .unwrap()
}

#[cfg(unix)]
#[test]
fn test_report_to_closed_stdout_exits_one() {
    let output = run_with_closed_stdout(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO error"));
}

#[cfg(unix)]
#[test]
fn test_completions_to_closed_stdout_exits_one() {
    let output = run_with_closed_stdout(&["completions", "bash"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
}

#[test]
fn test_json_logs_keep_stdout_clean() {
    let output = tflag()
        .args(["-vv", "--log-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "256\n8\n264\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|line| !line.is_empty()).collect();
    assert!(!lines.is_empty(), "expected JSON log lines on stderr");
    for line in &lines {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stderr line is not JSON ({e}): {line}"));
        assert!(event.get("level").is_some());
    }
    assert!(stderr.contains("computed flag union"));
}

#[test]
fn test_huge_template_width_fails_cleanly() {
    tflag()
        .args(["report", "--template", "%9223372036854775807u"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("too large"));
}
