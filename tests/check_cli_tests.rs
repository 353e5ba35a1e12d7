//! Tests for the sif-check binary
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn run_check(args: &[&str]) -> Output {
    let bin_path = std::env::var("CARGO_BIN_EXE_sif-check")
        .unwrap_or_else(|_| "target/debug/sif-check".to_string());

    Command::new(bin_path)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run sif-check")
}

fn write_case(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write case file");
    path.display().to_string()
}

#[test]
fn clean_file_exits_successfully() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_case(
        dir.path(),
        "clean.sif",
        "Simulation\n  Max Output Level = 3\nEnd\n",
    );

    let output = run_check(&[&path]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn findings_are_printed_with_one_based_positions() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_case(
        dir.path(),
        "case.sif",
        "Simulation\n  Foo Bar = 1\nEnd\n",
    );

    let output = run_check(&[&path]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(
        stdout,
        format!(
            "{}:2:3: warning: Unknown keyword \"Foo Bar\" in SIMULATION section\n",
            path
        )
    );
}

#[test]
fn byte_order_mark_does_not_hide_first_section() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_case(
        dir.path(),
        "windows.sif",
        "\u{feff}Simulation\r\n  Foo Bar = 1\r\nEnd\r\n",
    );

    let output = run_check(&[&path]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(
        stdout,
        format!(
            "{}:2:3: warning: Unknown keyword \"Foo Bar\" in SIMULATION section\n",
            path
        )
    );
}

#[test]
fn json_output() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_case(
        dir.path(),
        "case.sif",
        "Material 1\n  Colour = Red\n  Density = 1\nEnd\n",
    );

    let output = run_check(&["--format", "json", &path]);
    assert_eq!(output.status.code(), Some(1));

    let findings: Value = serde_json::from_slice(&output.stdout).expect("json output");
    let findings = findings.as_array().expect("array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["path"], path.as_str());
    assert_eq!(findings[0]["line"], 1);
    assert_eq!(findings[0]["start_column"], 2);
    assert_eq!(findings[0]["end_column"], 8);
    assert_eq!(findings[0]["source"], "elmer");
}

#[test]
fn extra_dictionary_is_honoured() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_case(dir.path(), "case.sif", "Material 1\n  Colour = Red\nEnd\n");
    let keywords = write_case(dir.path(), "extra.json", r#"{ "material": ["colour"] }"#);

    let output = run_check(&["--keywords", &keywords, &path]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("missing.sif").display().to_string();

    let output = run_check(&[&missing]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"), "{}", stderr);
}

#[test]
fn broken_dictionary_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_case(dir.path(), "case.sif", "Simulation\nEnd\n");
    let keywords = write_case(dir.path(), "broken.json", "{");

    let output = run_check(&["--keywords", &keywords, &path]);
    assert_eq!(output.status.code(), Some(2));
}
