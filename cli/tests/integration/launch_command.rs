//! Integration tests for `clarify-launch launch`.
//!
//! A shell script stands in for `<install>/jre/bin/java` and records the argv
//! it receives, one token per line.

#![cfg(target_os = "linux")]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clarify() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("clarify-launch"))
}

fn fake_install(root: &Path, exit_code: i32) -> (PathBuf, PathBuf) {
    let install = root.join("clarify");
    let lib = install.join("tools").join("lib");
    let bin = install.join("jre").join("bin");
    std::fs::create_dir_all(&lib).expect("mkdir lib");
    std::fs::create_dir_all(&bin).expect("mkdir bin");
    std::fs::write(lib.join("clarify-service-installer-2.0.jar"), b"").expect("jar");

    let record = root.join("argv.txt");
    let java = bin.join("java");
    std::fs::write(
        &java,
        format!(
            "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\"; done > '{}'\nexit {exit_code}\n",
            record.display()
        ),
    )
    .expect("write java");
    std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    (install, record)
}

fn write_topology(dir: &TempDir, install: &Path) -> String {
    let host = hostname::get()
        .expect("hostname")
        .into_string()
        .expect("utf-8 hostname");
    let yaml = format!(
        "clarify-nodes:
  - hostname: {host}
    netinterface: lo
    address: 127.0.0.1
    tools: /opt/tools
  - hostname: peer-1
    netinterface: eth0
    address: 10.0.0.6
    tools: /opt/tools
clarify-common:
  install: {}
  share: /srv/share
  user: svc
",
        install.display()
    );
    let path = dir.path().join("nodes.yaml");
    std::fs::write(&path, yaml).expect("write topology");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_launch_runs_installer_with_argv() {
    let dir = TempDir::new().expect("temp dir");
    let (install, record) = fake_install(dir.path(), 0);
    let cfg = write_topology(&dir, &install);

    clarify()
        .args(["launch", "--no-color", "--config", &cfg])
        .assert()
        .success()
        .stdout(predicate::str::contains("-net lo -address 127.0.0.1"));

    let argv = std::fs::read_to_string(record).expect("argv recorded");
    let tokens: Vec<&str> = argv.lines().collect();
    let jar = install
        .join("tools/lib/clarify-service-installer-2.0.jar")
        .display()
        .to_string();
    let install_str = install.display().to_string();
    assert_eq!(
        tokens,
        [
            "-jar", jar.as_str(), "-user", "svc", "-install", "/opt/tools", "-clarify", install_str.as_str(),
            "-share", "/srv/share", "-net", "lo", "-address", "127.0.0.1", "-hosts", "10.0.0.6",
        ]
    );
}

#[test]
fn test_launch_mirrors_installer_exit_code() {
    let dir = TempDir::new().expect("temp dir");
    let (install, _record) = fake_install(dir.path(), 7);
    let cfg = write_topology(&dir, &install);

    clarify()
        .args(["launch", "--quiet", "--config", &cfg])
        .assert()
        .code(7);
}
