//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("avaliacoes").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help_names_env_vars() {
    let mut cmd = Command::cargo_bin("avaliacoes").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ALLOWED_HOSTS"))
        .stdout(predicate::str::contains("PGHOST"))
        .stdout(predicate::str::contains("does NOT verify"));
}

#[test]
fn test_serve_requires_database_settings() {
    let mut cmd = Command::cargo_bin("avaliacoes").unwrap();
    cmd.current_dir(std::env::temp_dir())
        .env_clear()
        .arg("serve")
        .arg("--allowed-origin")
        .arg("https://site.example");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--db-host"));
}
