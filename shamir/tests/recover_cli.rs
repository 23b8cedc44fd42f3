// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    io::Write,
    process::{Command, Output},
};
use tempfile::NamedTempFile;

fn write_share_file(data: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data.as_bytes()).unwrap();
    file
}

fn recover(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recover"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

// f(X) = X^2 + 3
const SHARES: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

#[test]
fn test_text_output() {
    let file = write_share_file(SHARES);
    let path = file.path().to_str().unwrap();
    let output = recover(&[path]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}: secret = 3 (k = 3, used 3 of 4 points)\n", path)
    );
}

#[test]
fn test_json_output_with_threshold_override() {
    let file = write_share_file(SHARES);
    let path = file.path().to_str().unwrap();
    let output = recover(&["--format", "json", "--threshold", "4", path]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["secret"], "3");
    assert_eq!(value["threshold"], 4);
    assert_eq!(value["used"], 4);
    assert_eq!(value["declared"], 4);
}

#[test]
fn test_one_report_per_file() {
    let first = write_share_file(SHARES);
    let second = write_share_file(
        r#"{ "keys": { "k": 2 }, "1": { "base": "10", "value": "7" }, "2": { "base": "10", "value": "9" } }"#,
    );
    let output = recover(&[
        first.path().to_str().unwrap(),
        second.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("secret = 3"));
    assert!(lines[1].contains("secret = 5"));
}

#[test]
fn test_failure_exits_non_zero() {
    // The line through (1, 1) and (3, 2) does not cross the y-axis at an integer.
    let file = write_share_file(
        r#"{ "keys": { "k": 2 }, "1": { "base": "10", "value": "1" }, "3": { "base": "10", "value": "2" } }"#,
    );
    let output = recover(&[file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to recover the secret"));
}

#[test]
fn test_missing_file_exits_non_zero() {
    let output = recover(&["/nonexistent/shares.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load the share file"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let file = write_share_file(SHARES);
    let output = recover(&["--format", "yaml", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
}
