//! Smoke tests for the recordings binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("recordings").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("recordings").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--db-user"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("recordings").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recordings"));
}

#[test]
fn test_serve_rejects_unknown_database_scheme() {
    let mut cmd = Command::cargo_bin("recordings").unwrap();
    cmd.arg("serve")
        .arg("--database-url")
        .arg("mysql://root@127.0.0.1:3306/recordings")
        .env_remove("RUST_LOG");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"))
        .stderr(predicate::str::contains("unsupported database scheme"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("recordings").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}
