// tests/cli_commands_test.rs
use std::cmp::Ordering;
use std::process::Command;

use semver_compat::cli::{run_check, run_compare, run_max, run_sort, CheckOutcome};
use semver_compat::Parser;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_semver-compat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_check_report_outcomes() {
    let report = run_check(&Parser::default(), ["1.0.0-rc.1+build.5", "1.0.1b2", "1.0"]);
    assert_eq!(report.invalid_count(), 1);
    match &report.outcomes[1] {
        CheckOutcome::Valid(v) => assert_eq!(v.to_string(), "1.0.1-b-2"),
        other => panic!("expected valid outcome, got {:?}", other),
    }
    match &report.outcomes[2] {
        CheckOutcome::Invalid { input, reason } => {
            assert_eq!(input, "1.0");
            assert!(reason.contains("Invalid version string"));
        }
        other => panic!("expected invalid outcome, got {:?}", other),
    }
}

#[test]
fn test_compare_workflow() {
    let c = run_compare(&Parser::default(), "1.0.0-alpha.1", "1.0.0-alpha.beta").unwrap();
    assert_eq!(c.ordering, Ordering::Less);
    assert_eq!(c.symbol(), "<");
}

#[test]
fn test_sort_workflow() {
    let sorted = run_sort(
        &Parser::default(),
        ["1.0.0", "1.0.0-rc.1", "1.0.1b", "0.1.0"],
        false,
    )
    .unwrap();
    let originals: Vec<_> = sorted.iter().map(|v| v.original()).collect();
    assert_eq!(originals, vec!["0.1.0", "1.0.0-rc.1", "1.0.0", "1.0.1b"]);
}

#[test]
fn test_sort_rejects_invalid_input() {
    let err = run_sort(&Parser::default(), ["1.0.0", "bogus"], false).unwrap_err();
    assert_eq!(err.to_string(), "Invalid version string: 'bogus'");
}

#[test]
fn test_max_workflow() {
    let max = run_max(&Parser::default(), ["1.2.3-rc.1", "1.2.3+b", "1.2.2"])
        .unwrap()
        .unwrap();
    assert_eq!(max.original(), "1.2.3+b");
}

#[test]
fn test_binary_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-compat"));
    assert!(stdout.contains("compare"));
}

#[test]
fn test_binary_missing_config_reports_error() {
    let output = run(&["--config", "tests/fixtures/missing.toml", "check", "1.0.0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error loading config"));
    assert!(stderr.contains("I/O error"));
}

#[test]
fn test_binary_malformed_config_reports_error() {
    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut temp_file, b"[output\ncolor = ").unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();

    let output = run(&["--config", &path, "max", "1.0.0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_binary_check_exit_codes() {
    let ok = run(&["check", "1.0.0", "1.0.1b2"]);
    assert!(ok.status.success());

    let bad = run(&["check", "1.0.0", "01.0.0"]);
    assert_eq!(bad.status.code(), Some(1));
    let stderr = String::from_utf8(bad.stderr).unwrap();
    assert!(stderr.contains("01.0.0"));
}

#[test]
fn test_binary_compare() {
    let output = run(&["compare", "1.0.0-rc.1", "1.0.0"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(console::strip_ansi_codes(stdout.trim()), "1.0.0-rc.1 < 1.0.0");
}

#[test]
fn test_binary_config_file() {
    let output = run(&[
        "--config",
        "tests/fixtures/strict_canonical.toml",
        "max",
        "1.0.0+b",
        "1.0.0-rc.1",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "1.0.0+b");

    let rejected = run(&["--config", "tests/fixtures/strict_canonical.toml", "max", "1.0.0b1"]);
    assert_eq!(rejected.status.code(), Some(1));
}

#[test]
fn test_binary_strict_flag() {
    let output = run(&["--strict", "compare", "1.0.1b2", "1.0.1"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_binary_sort_reverse() {
    let output = run(&["sort", "--reverse", "1.0.0", "2.0.0", "1.0.0-alpha"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines, vec!["2.0.0", "1.0.0", "1.0.0-alpha"]);
}
