//! CLI surface tests.
//!
//! These never reach the network: they cover argument parsing, completions,
//! and the schema checks that run before any remote call.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("ghvars").unwrap();
    // keep a GITHUB_TOKEN from the host environment out of the tests
    cmd.env_remove("GITHUB_TOKEN");
    cmd
}

#[test]
fn test_help_shows_both_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("update"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghvars"));
}

#[test]
fn test_unknown_command_fails() {
    cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_fetch_requires_org() {
    cmd()
        .args(["fetch", "--token", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--org"));
}

#[test]
fn test_fetch_requires_token() {
    cmd()
        .args(["fetch", "--org", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn test_invalid_scope_value_rejected() {
    cmd()
        .args(["fetch", "--org", "acme", "--token", "t", "--scope", "everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_update_rejects_non_csv_file_before_any_remote_call() {
    cmd()
        .args(["update", "--org", "acme", "--token", "t", "--csv", "secrets.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a .csv file"));
}

#[test]
fn test_update_rejects_batch_with_missing_columns() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("items.csv");
    std::fs::write(&csv_path, "type,name,value\norg_variable,ENV,x\n").unwrap();

    cmd()
        .args(["update", "--org", "acme", "--token", "t", "--scope", "org"])
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns"));
}

#[test]
fn test_update_rejects_out_of_scope_row_type() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("items.csv");
    std::fs::write(
        &csv_path,
        "type,name,value,repository\norg_secret,TOKEN,x,\n",
    )
    .unwrap();

    cmd()
        .args(["update", "--org", "acme", "--token", "t", "--scope", "repo"])
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type 'org_secret'"));
}

#[test]
fn test_completions_bash_outputs_script() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghvars"));
}
