//! Common utilities for CLI E2E tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Invoke the CLI with an isolated config file and optional stdin.
pub fn run_cli(config: &Path, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_triage-cli"))
        .args(args)
        .env("TRIAGE_CONFIG", config)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Invoke a CLI command and expect success.
pub fn run_cli_success(config: &Path, args: &[&str], stdin: Option<&str>) -> String {
    let (stdout, stderr, code) = run_cli(config, args, stdin);
    assert_eq!(
        code, 0,
        "CLI command failed with code {}: {:?}\n{}",
        code, args, stderr
    );
    stdout
}

/// Invoke a CLI command and expect failure.
pub fn run_cli_failure(config: &Path, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let (stdout, stderr, code) = run_cli(config, args, stdin);
    assert!(code != 0, "CLI command unexpectedly succeeded: {:?}", args);
    (stdout, stderr, code)
}

/// Parse JSON output from CLI.
pub fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack,
        needle
    );
}
