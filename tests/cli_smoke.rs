//! CLI binary smoke tests using assert_cmd.
//!
//! These tests feed operands on stdin to the compiled `dynmat` binary and
//! check the printed results and failure handling.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("dynmat").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vector"))
        .stdout(predicate::str::contains("matrix"));
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[test]
fn vector_dot_product() {
    cmd()
        .args(["--int", "vector", "dot", "--size", "3"])
        .write_stdin("1 2 3\n4 5 6\n")
        .assert()
        .success()
        .stdout("32\n");
}

#[test]
fn vector_add() {
    cmd()
        .args(["vector", "add", "-n", "3", "--int"])
        .write_stdin("1 2 3 4 5 6")
        .assert()
        .success()
        .stdout("5 7 9 \n");
}

#[test]
fn matrix_multiply() {
    cmd()
        .args(["--int", "matrix", "mul", "--size", "2"])
        .write_stdin("1 2\n3 4\n5 6\n7 8\n")
        .assert()
        .success()
        .stdout("19 22 \n43 50 \n");
}

#[test]
fn matrix_vector_product() {
    cmd()
        .args(["--int", "matvec", "--size", "2"])
        .write_stdin("1 2\n3 4\n5 6\n")
        .assert()
        .success()
        .stdout("17 39 \n");
}

#[test]
fn scale_accepts_negative_factor() {
    cmd()
        .args(["scale", "--size", "1", "--by", "-0.5"])
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout("-2 \n");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn short_input_fails() {
    cmd()
        .args(["--int", "vector", "add", "--size", "3"])
        .write_stdin("1 2 3 4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("second vector"));
}

#[test]
fn zero_size_fails() {
    cmd()
        .args(["matrix", "add", "--size", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn unknown_operation_is_rejected() {
    cmd()
        .args(["vector", "cross", "--size", "3"])
        .assert()
        .failure();
}
