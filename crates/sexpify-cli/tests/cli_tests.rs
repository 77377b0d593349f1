//! Integration tests for the `sexpify` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the binary end
//! to end: conversion to stdout and to an output file, the empty-document
//! warning, error handling for unreadable and malformed input, and the
//! nesting guard flag.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.yaml fixture.
fn sample_yaml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.yaml")
}

/// Helper: path to the nested.yaml fixture.
fn nested_yaml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/nested.yaml")
}

/// Helper: path to the empty.yaml fixture (comments only).
fn empty_yaml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/empty.yaml")
}

/// Helper: path to the invalid.yaml fixture.
fn invalid_yaml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid.yaml")
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion to stdout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_file_to_stdout() {
    // Test 1: converting a file with no output path prints the S-expression
    let expected = "\
(
  (name \"Alice\")
  (tags
    (tag \"a\")
    (tag \"b\")
  )
)
";

    Command::cargo_bin("sexpify")
        .unwrap()
        .arg(sample_yaml_path())
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn convert_nested_file_to_stdout() {
    // Test 2: nested mappings and a sequence of mappings render as nested lists
    Command::cargo_bin("sexpify")
        .unwrap()
        .arg(nested_yaml_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(server"))
        .stdout(predicate::str::contains("(port 8080)"))
        .stdout(predicate::str::contains("(user\n"))
        .stdout(predicate::str::contains("(name \"Ada\")"))
        .stdout(predicate::str::contains("(debug true)"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion to a file
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_file_to_file() {
    // Test 3: with an output path the S-expression lands in the file
    let output_path = "/tmp/sexpify-test-convert-output.sexp";

    // Clean up from any prior run
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("sexpify")
        .unwrap()
        .args([sample_yaml_path(), output_path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted"));

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let expected = "\
(
  (name \"Alice\")
  (tags
    (tag \"a\")
    (tag \"b\")
  )
)
";
    assert_eq!(content, expected, "file output should end with a newline");

    // Clean up
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn success_message_names_both_paths() {
    // Test 4: the confirmation line mentions the input and output paths
    let output_path = "/tmp/sexpify-test-message-output.sexp";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("sexpify")
        .unwrap()
        .args([sample_yaml_path(), output_path])
        .assert()
        .success()
        .stdout(predicate::str::contains(sample_yaml_path()))
        .stdout(predicate::str::contains(output_path));

    let _ = std::fs::remove_file(output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Empty documents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn whitespace_only_file_warns_and_prints_nil() {
    // Test 5: a file with nothing but whitespace converts to (nil) with a
    // warning, exit code 0
    let input_path = "/tmp/sexpify-test-blank-input.yaml";
    std::fs::write(input_path, "   \n\n").expect("writing the blank input must succeed");

    Command::cargo_bin("sexpify")
        .unwrap()
        .arg(input_path)
        .assert()
        .success()
        .stdout(predicate::str::diff("(nil)\n"))
        .stderr(predicate::str::contains(
            "Warning: input YAML file is empty or contains only null values",
        ));

    let _ = std::fs::remove_file(input_path);
}

#[test]
fn comment_only_file_is_empty() {
    // Test 6: a file holding only comments parses to null and warns
    Command::cargo_bin("sexpify")
        .unwrap()
        .arg(empty_yaml_path())
        .assert()
        .success()
        .stdout(predicate::str::diff("(nil)\n"))
        .stderr(predicate::str::contains("Warning:"));
}

#[test]
fn null_document_warns_and_prints_nil() {
    // Test 7: an explicit null document counts as empty
    let input_path = "/tmp/sexpify-test-null-input.yaml";
    std::fs::write(input_path, "~\n").expect("writing the null input must succeed");

    Command::cargo_bin("sexpify")
        .unwrap()
        .arg(input_path)
        .assert()
        .success()
        .stdout(predicate::str::diff("(nil)\n"))
        .stderr(predicate::str::contains("Warning:"));

    let _ = std::fs::remove_file(input_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_file_fails() {
    // Test 8: a nonexistent input path is a runtime error, exit code 1
    Command::cargo_bin("sexpify")
        .unwrap()
        .arg("/tmp/sexpify-test-no-such-file.yaml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn invalid_yaml_fails() {
    // Test 9: malformed YAML surfaces the parse context on stderr
    Command::cargo_bin("sexpify")
        .unwrap()
        .arg(invalid_yaml_path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse YAML file"));
}

#[test]
fn unwritable_output_fails() {
    // Test 10: an output path in a missing directory surfaces the write context
    Command::cargo_bin("sexpify")
        .unwrap()
        .args([
            sample_yaml_path(),
            "/tmp/sexpify-test-no-such-dir/out.sexp",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write output file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// The --max-depth flag
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn max_depth_rejects_deep_documents() {
    // Test 11: the nested fixture needs three container levels, so a limit of
    // two aborts the conversion
    Command::cargo_bin("sexpify")
        .unwrap()
        .args(["--max-depth", "2", nested_yaml_path()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to convert YAML file"))
        .stderr(predicate::str::contains(
            "document too deeply nested: more than 2 levels",
        ));
}

#[test]
fn max_depth_accepts_sufficient_limit() {
    // Test 12: the same fixture converts once the limit covers its depth
    Command::cargo_bin("sexpify")
        .unwrap()
        .args(["--max-depth", "3", nested_yaml_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(debug true)"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    // Test 13: --help names the arguments and the stdout fallback
    Command::cargo_bin("sexpify")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Convert a YAML file to an S-expression",
        ))
        .stdout(predicate::str::contains("--max-depth"))
        .stdout(predicate::str::contains("printed to standard output"));
}

#[test]
fn missing_input_argument_fails() {
    // Test 14: invoking with no arguments is a usage error, exit code 2
    Command::cargo_bin("sexpify")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_fails() {
    // Test 15: an unrecognized flag is a usage error, exit code 2
    Command::cargo_bin("sexpify")
        .unwrap()
        .args(["--frobnicate", sample_yaml_path()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error"));
}
