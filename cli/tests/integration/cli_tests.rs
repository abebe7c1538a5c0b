//! Argument parsing and top-level behavior of the binary.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn clarify() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("clarify-launch"))
}

#[test]
fn test_help_lists_subcommands() {
    clarify()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("launch"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_no_subcommand_prints_help_and_fails() {
    clarify()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_human() {
    clarify()
        .args(["version", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_json() {
    let out = clarify()
        .args(["version", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help_documents_cfg_alias_and_policies() {
    clarify()
        .args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cfg"))
        .stdout(predicate::str::contains("per-peer"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_invalid_hosts_encoding_is_rejected() {
    clarify()
        .args(["plan", "--hosts-encoding", "commas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_topology_file_fails_with_path() {
    clarify()
        .args(["plan", "--config", "/nonexistent/nodes.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read /nonexistent/nodes.yaml"));
}
