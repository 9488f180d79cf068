use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn run_check(args: &[&str], stdin: &str) -> Output {
    let bin_path = std::env::var("CARGO_BIN_EXE_zlang-check")
        .unwrap_or_else(|_| "target/debug/zlang-check".to_string());
    // Run from an empty directory so no project config is picked up
    let workdir = tempfile::tempdir().expect("create temp dir");

    let mut child = Command::new(bin_path)
        .args(args)
        .current_dir(workdir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn checker");

    child
        .stdin
        .take()
        .expect("Child stdin should be available")
        .write_all(stdin.as_bytes())
        .expect("Failed to write source");

    child.wait_with_output().expect("Failed to wait for checker")
}

#[test]
fn test_clean_source_exits_zero() {
    let output = run_check(&[], "LETT x = 5;\nOUT x;\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("No syntax errors detected"));
    assert!(stdout.contains("SYNTAX SUCCESSFULLY ANALYZED!"));
}

#[test]
fn test_errors_are_tabulated() {
    let output = run_check(&[], "LETT x = 5\nLett y 10;\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Line 1 | Missing semicolon at end of statement"));
    assert!(stdout.contains("Line 2 | Invalid keyword - use LETT (uppercase)"));
    assert!(stdout.contains("2 errors found"));
}

#[test]
fn test_blank_input_is_rejected() {
    let output = run_check(&[], "  \n\t\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("NO CODE ENTERED"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_output_with_config_geometry() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config_path = dir.path().join("zlang.toml");
    std::fs::write(&config_path, "[report]\nline_height = 20.0\nvertical_offset = 3.0\n")
        .expect("write config");
    let config_arg = config_path.to_string_lossy().to_string();

    let output = run_check(
        &["--format", "json", "--config", &config_arg],
        "// header\nOUT max(x;\n",
    );
    assert_eq!(output.status.code(), Some(1));

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let diagnostics = value["diagnostics"].as_array().expect("diagnostics array");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["line"], 2);
    assert_eq!(diagnostics[0]["rule"], "unmatched-parentheses");
    assert_eq!(diagnostics[0]["highlight_offset"], 23.0);
    assert_eq!(value["summary"]["title"], "SYNTAX ERROR DETECTED!");
}

#[test]
fn test_reads_source_file_argument() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let source = dir.path().join("main.z");
    std::fs::write(&source, "LETT;\n").expect("write source");
    let source_arg = source.to_string_lossy().to_string();

    let output = run_check(&[&source_arg], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Missing variable name after LETT"));
}

#[test]
fn test_leading_blank_lines_and_bom_are_skipped() {
    let output = run_check(&[], "\u{FEFF}\n\n  LETT x = 5\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Line 1 | Missing semicolon at end of statement"));

    let output = run_check(&[], "\u{FEFF}\n");
    assert_eq!(output.status.code(), Some(2));
}
