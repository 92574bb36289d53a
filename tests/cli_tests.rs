//! End-to-end tests that run the built `lambda-lessons` binary.

#![cfg(feature = "cli")]

use std::process::{Command, Output};

use rstest::rstest;

fn lessons(arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lambda-lessons"))
        .args(arguments)
        .env("RUST_LOG", "off")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .unwrap()
}

fn stdout_of(arguments: &[&str]) -> String {
    let output = lessons(arguments);
    assert!(output.status.success(), "{arguments:?} failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// Lessons on stdout
// =============================================================================

#[rstest]
fn logger_prints_hello_exactly_once() {
    assert_eq!(stdout_of(&["logger"]), "hello\n");
}

#[rstest]
#[case(&["adder"], "5\n10\n")]
#[case(&["odd-sum"], "true\nfalse\n")]
#[case(&["composition"], "[2, 4, 6]\n")]
#[case(&["sum-of-plus2"], "25\n")]
#[case(&["sum-of-plus2", "2147483647", "2147483647"], "4294967298\n")]
fn lesson_output(#[case] arguments: &[&str], #[case] expected: &str) {
    assert_eq!(stdout_of(arguments), expected);
}

#[rstest]
fn challenge_totals_the_bundled_document() {
    assert_eq!(stdout_of(&["challenge", "--data-root", "data"]), "135\n");
}

// =============================================================================
// Failures
// =============================================================================

#[rstest]
fn sum_of_plus2_rejects_values_beyond_i32() {
    let output = lessons(&["sum-of-plus2", "9223372036854775807"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[rstest]
fn missing_document_exits_with_failure() {
    let output = lessons(&["challenge", "--data-root", "data", "--path", "/absent.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
