//! Integration tests for the nexuscore CLI

use std::process::Command;

fn run_nexuscore(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "nexuscore", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env_remove("NEXUSCORE_OS_NAME")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_nexuscore(&["--help"]);

    assert!(success);
    assert!(stdout.contains("nexuscore"));
    assert!(stdout.contains("--os-name"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--debug"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_nexuscore(&["--version"]);

    assert!(success);
    assert!(stdout.contains("nexuscore"));
}

#[test]
fn test_text_report() {
    let (stdout, _, success) = run_nexuscore(&[]);

    assert!(success);
    assert!(stdout.contains("Platform"));
    assert!(stdout.contains("OS Name"));
    assert!(stdout.contains("OS Family"));
    assert!(stdout.contains("Is Windows?"));
    assert!(stdout.contains("Is Linux/Unix?"));
    assert!(stdout.contains("Is Mac?"));
    assert!(stdout.contains("Is Solaris?"));
}

#[test]
fn test_os_name_override() {
    let (stdout, _, success) = run_nexuscore(&["--os-name", "SunOS"]);

    assert!(success);
    assert!(stdout.contains("SunOS"));
    assert!(stdout.contains("Solaris"));
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_nexuscore(&["--os-name", "Mac OS X", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["os_name"], "Mac OS X");
    assert_eq!(parsed["family"], "Mac");
    assert_eq!(parsed["is_mac"], true);
    assert_eq!(parsed["is_windows"], false);
}

#[test]
fn test_env_override() {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "nexuscore", "--", "--output", "json"])
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env("NEXUSCORE_OS_NAME", "Windows 10")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(parsed["os_name"], "Windows 10");
    assert_eq!(parsed["family"], "Windows");
}

#[test]
fn test_invalid_output_mode() {
    let (_, stderr, success) = run_nexuscore(&["--output", "yaml"]);

    assert!(!success);
    assert!(stderr.contains("yaml"));
}
