//! Tests for the command-line binary.

mod helpers;

use std::io::Write;
use std::process::{Command, Output};

use helpers::fixture;
use tempfile::NamedTempFile;

fn dig_inspect(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dig_inspect"))
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("Failed to run dig_inspect")
}

fn transcript_file(name: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(fixture(name).as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_parse_file_prints_json() {
    let file = transcript_file("example_a.txt");

    let output = dig_inspect(&["parse", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "31562");
    assert_eq!(json["answer"].as_array().unwrap().len(), 2);
}

#[test]
fn test_parse_all_blocks_prints_array() {
    let file = transcript_file("qr_example_net.txt");

    let output = dig_inspect(&["parse", "--all-blocks", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_parse_without_header_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ";; connection timed out; no servers could be reached").unwrap();

    let output = dig_inspect(&["parse", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HEADER"), "stderr: {stderr}");
}

#[test]
fn test_parse_missing_file_fails() {
    let output = dig_inspect(&["parse", "/nonexistent/dig-output.txt"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_lookup_invalid_domain_exits_with_usage_code() {
    // any existing file passes the binary check; the name is rejected first
    let fake_dig = NamedTempFile::new().unwrap();

    let output = dig_inspect(&[
        "lookup",
        "--dig-binary",
        fake_dig.path().to_str().unwrap(),
        "not a domain",
    ]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_lookup_rejects_option_like_server() {
    let output = dig_inspect(&["lookup", "--server=-f/etc/passwd", "example.org"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_logs_stay_off_stdout() {
    let file = transcript_file("qr_example_net.txt");

    // debug logging reports the skipped query block
    let output = Command::new(env!("CARGO_BIN_EXE_dig_inspect"))
        .args(["--log-level", "debug", "--log-format", "json", "parse"])
        .arg(file.path())
        .output()
        .expect("Failed to run dig_inspect");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["answer"][0]["data"], "93.184.215.24");
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stderr.lines() {
        let entry: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(entry.get("level").is_some(), "log line: {line}");
    }
}
