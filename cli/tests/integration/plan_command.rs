//! Integration tests for `clarify-launch plan` and `check`.
//!
//! Each test writes a topology into a temp dir and points `--config` at it,
//! so nothing outside the temp dir is read.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clarify() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("clarify-launch"))
}

fn this_host() -> String {
    hostname::get()
        .expect("hostname")
        .into_string()
        .expect("utf-8 hostname")
}

/// Install tree with an installer jar under `tools/lib`.
fn install_dir(root: &Path) -> std::path::PathBuf {
    let install = root.join("clarify");
    let lib = install.join("tools").join("lib");
    std::fs::create_dir_all(&lib).expect("mkdir");
    std::fs::write(lib.join("clarify-service-installer-1.0.jar"), b"").expect("jar");
    install
}

fn write_topology(dir: &TempDir, local: &str, net: &str, address: &str, install: &Path) -> String {
    let yaml = format!(
        "clarify-nodes:
  - hostname: peer-1
    netinterface: eth0
    address: 10.0.0.6
    tools: /opt/tools
  - hostname: {local}
    netinterface: {net}
    address: \"{address}\"
    tools: /opt/tools
  - hostname: peer-2
    netinterface: eth0
    tools: /opt/tools
clarify-common:
  install: {}
  share: /srv/share
  user: svc
  nomadport: 4646
",
        install.display()
    );
    let path = dir.path().join("nodes.yaml");
    std::fs::write(&path, yaml).expect("write topology");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_plan_unknown_host_reports_node_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, "not-this-host.invalid", "eth0", "10.0.0.5", &install);
    clarify()
        .args(["plan", "--config", &cfg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node not found"));
}

#[test]
fn test_plan_unknown_host_json_error_code() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, "not-this-host.invalid", "eth0", "10.0.0.5", &install);
    let out = clarify()
        .args(["plan", "--json", "--config", &cfg])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "node_not_found");
}

#[test]
fn test_plan_reads_config_from_env() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, "not-this-host.invalid", "eth0", "10.0.0.5", &install);
    clarify()
        .arg("plan")
        .env("CLARIFY_NODES", &cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node not found"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_plan_on_loopback_produces_installer_arguments() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, &this_host(), "lo", "127.0.0.1", &install);

    let out = clarify()
        .args(["plan", "--json", "--config", &cfg])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let plan: serde_json::Value = serde_json::from_slice(&out).expect("json");
    let jar = install
        .join("tools/lib/clarify-service-installer-1.0.jar")
        .display()
        .to_string();
    let install_str = install.display().to_string();

    assert_eq!(plan["address"], "127.0.0.1");
    assert_eq!(
        plan["args"],
        serde_json::json!([
            "-jar", jar, "-user", "svc", "-install", "/opt/tools", "-clarify", install_str,
            "-share", "/srv/share", "-net", "lo", "-address", "127.0.0.1",
            "-nomad.port", "4646", "-hosts", "10.0.0.6 peer-2",
        ])
    );
    assert_eq!(plan["peers"], serde_json::json!(["10.0.0.6", "peer-2"]));
}

#[cfg(target_os = "linux")]
#[test]
fn test_plan_per_peer_override() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, &this_host(), "lo", "127.0.0.1", &install);

    let out = clarify()
        .args(["plan", "--json", "--hosts-encoding", "per-peer", "--config", &cfg])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let plan: serde_json::Value = serde_json::from_slice(&out).expect("json");
    let args = plan["args"].as_array().expect("array");
    let tail: Vec<&str> = args[args.len() - 3..]
        .iter()
        .map(|v| v.as_str().expect("string"))
        .collect();
    assert_eq!(tail, ["-hosts", "10.0.0.6", "peer-2"]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_check_binding_mismatch_names_interface_and_address() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, &this_host(), "lo", "10.255.255.1", &install);
    clarify()
        .args(["check", "--config", &cfg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Binding mismatch"))
        .stderr(predicate::str::contains("'lo'"))
        .stderr(predicate::str::contains("10.255.255.1"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_check_loopback_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    let install = install_dir(dir.path());
    let cfg = write_topology(&dir, &this_host(), "lo", "127.0.0.1", &install);
    clarify()
        .args(["check", "--no-color", "--config", &cfg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node identity verified"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_plan_missing_jar_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let install = dir.path().join("empty-install");
    std::fs::create_dir_all(&install).expect("mkdir");
    let cfg = write_topology(&dir, &this_host(), "lo", "127.0.0.1", &install);
    clarify()
        .args(["plan", "--config", &cfg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to locate service installer jar"));
}
