//! Domain types for the shared cluster topology.
//!
//! Pure data only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

/// Default topology file, relative to the working directory.
pub const DEFAULT_TOPOLOGY_FILE: &str = "nodes.yaml";

/// Installer java executable, relative to the install path.
pub const JAVA_RELATIVE_PATH: [&str; 3] = ["jre", "bin", "java"];

// ── Topology schema ──────────────────────────────────────────────────────────

/// The shared description of all cluster nodes and common installer settings.
///
/// Hostnames are expected to be unique but nothing enforces it; lookups take
/// the first match in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Node descriptors, in the order they appear in the file.
    #[serde(rename = "clarify-nodes", default)]
    pub nodes: Vec<NodeDescriptor>,
    /// Settings shared by every node.
    #[serde(rename = "clarify-common")]
    pub clarify: ClarifySettings,
}

/// One cluster node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Host name, compared verbatim against the machine's reported name.
    pub hostname: String,
    /// OS-level interface name, e.g. `eth0`.
    #[serde(rename = "netinterface", alias = "net-interface")]
    pub net_interface: String,
    /// Optional IPv4 literal. Empty means "derive from DNS".
    #[serde(default)]
    pub address: String,
    /// Tools install directory passed as `-install`.
    #[serde(rename = "tools")]
    pub tools_path: String,
}

impl NodeDescriptor {
    /// The configured address, or `None` when the field is blank.
    #[must_use]
    pub fn explicit_address(&self) -> Option<&str> {
        let trimmed = self.address.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Installer settings shared across all nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifySettings {
    /// Clarify install directory. Passed verbatim as `-clarify`.
    #[serde(rename = "install")]
    pub install_path: String,
    /// Shared storage directory, passed as `-share`.
    #[serde(rename = "share")]
    pub share_path: String,
    /// Service account the installer runs as.
    pub user: String,
    /// Nomad port. `None` or `0` omits `-nomad.port`.
    #[serde(
        rename = "nomadport",
        alias = "nomad-port",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nomad_port: Option<u16>,
    #[serde(rename = "address-policy", default)]
    pub address_policy: AddressPolicy,
    #[serde(rename = "hosts-encoding", default)]
    pub hosts_encoding: HostsEncoding,
}

impl ClarifySettings {
    /// Configured nomad port, treating `0` as unset.
    #[must_use]
    pub fn nomad_port(&self) -> Option<u16> {
        self.nomad_port.filter(|p| *p != 0)
    }

    /// Path of the java executable that runs the installer.
    #[must_use]
    pub fn installer_program(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.install_path);
        path.extend(JAVA_RELATIVE_PATH);
        path
    }
}

// ── Declared policies ────────────────────────────────────────────────────────

/// How peers without an explicit `address` are passed to the installer.
///
/// The local node is unaffected: a blank local address is always resolved
/// through DNS so it can be checked against the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AddressPolicy {
    /// Peers without a literal are passed by hostname.
    #[default]
    Literal,
    /// Peers without a literal are passed by their DNS-resolved address.
    Resolve,
}

/// How the peer list is encoded after `-hosts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HostsEncoding {
    /// A single token holding all peers separated by spaces.
    #[default]
    Joined,
    /// One token per peer.
    PerPeer,
}

// ── Unit tests ───────────────────────────────────────────────────────────────
