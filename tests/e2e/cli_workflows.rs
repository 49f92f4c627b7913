//! E2E tests for complete CLI workflows
//! Tests the entire application through the command-line interface

use std::io::Write;
use std::process::{Command, Stdio};

const CLI_BINARY: &str = "target/debug/grint-cli";

fn run_command(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {}", CLI_BINARY))
}

fn run_parse_string(value: &str) -> std::process::Output {
    run_command(&["-c", value])
}

#[test]
fn test_parse_single_value() {
    let output = run_parse_string("1,034,891");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1034891");
}

#[test]
fn test_parse_ungrouped_value() {
    let output = run_parse_string("756");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "756");
}

#[test]
fn test_misplaced_comma_fails() {
    let output = run_parse_string("12,72,891");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Grint:"));
    assert!(stderr.contains("ERR_GROUPING"));
    assert!(stderr.contains("72"));
}

#[test]
fn test_missing_comma_fails() {
    let output = run_parse_string("178100,301");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_GROUPING"));
}

#[test]
fn test_decimal_point_fails() {
    let output = run_parse_string("23,816.92");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_SYNTAX"));
}

#[test]
fn test_range_overflow_fails() {
    let output = run_parse_string("18,446,744,073,709,551,616");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_RANGE"));
}

#[test]
fn test_parse_json_output() {
    let output = run_command(&["-c", "2,081", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"input\":\"2,081\""));
    assert!(stdout.contains("\"value\":2081"));
}

#[test]
fn test_group_integer() {
    let output = run_command(&["-g", "1034891"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1,034,891");
}

#[test]
fn test_group_integer_json_output() {
    let output = run_command(&["-g", "2081", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"grouped\":\"2,081\""));
    assert!(stdout.contains("\"value\":2081"));
}

#[test]
fn test_group_rejects_garbage() {
    let output = run_command(&["-g", "not-a-number"]);

    assert!(!output.status.success());
}

#[test]
fn test_stdin_batch() {
    let mut child = Command::new(CLI_BINARY)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|_| panic!("Failed to execute {}", CLI_BINARY));

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"756\n2,081\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["756", "2081"]);
}

#[test]
fn test_exit_code_success() {
    let output = run_parse_string("999");
    assert!(output.status.success());
}

#[test]
fn test_exit_code_failure() {
    let output = run_parse_string("100,");
    assert!(!output.status.success());
}
