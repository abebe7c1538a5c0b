//! Installer invocation contract.
//!
//! The installer reads a fixed flag sequence:
//!
//! ```text
//! -jar <jar> -user <user> -install <tools> -clarify <install> -share <share>
//! -net <iface> [-address <ipv4>] [-nomad.port <port>] -hosts <peers>...
//! ```
//!
//! [`InvocationBuilder`] collects typed fields and renders that sequence in
//! one step, so flag order and omission rules live in a single function.

use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::domain::topology::{ClarifySettings, HostsEncoding, NodeDescriptor};

// ── Flags ────────────────────────────────────────────────────────────────────

pub const FLAG_JAR: &str = "-jar";
pub const FLAG_USER: &str = "-user";
pub const FLAG_INSTALL: &str = "-install";
pub const FLAG_CLARIFY: &str = "-clarify";
pub const FLAG_SHARE: &str = "-share";
pub const FLAG_NET: &str = "-net";
pub const FLAG_ADDRESS: &str = "-address";
pub const FLAG_NOMAD_PORT: &str = "-nomad.port";
pub const FLAG_HOSTS: &str = "-hosts";

// ── Peers ────────────────────────────────────────────────────────────────────

/// A non-local node as handed to the installer: hostname or IPv4 literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeerEndpoint(String);

impl PeerEndpoint {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self(endpoint.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── InvocationSpec ───────────────────────────────────────────────────────────

/// The installer's argument vector. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvocationSpec {
    args: Vec<String>,
}

impl InvocationSpec {
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Space-joined rendering for display only; never passed through a shell.
impl fmt::Display for InvocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Accumulates the installer's inputs; [`build`](Self::build) renders tokens.
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
    jar: String,
    user: String,
    tools_path: String,
    install_path: String,
    share_path: String,
    net_interface: String,
    address: Option<Ipv4Addr>,
    nomad_port: Option<u16>,
    peers: Vec<PeerEndpoint>,
    hosts_encoding: HostsEncoding,
}

impl InvocationBuilder {
    /// Start from the local node, the shared settings and the jar path.
    ///
    /// The address is left unset; see [`address`](Self::address).
    #[must_use]
    pub fn new(local: &NodeDescriptor, settings: &ClarifySettings, jar: impl Into<String>) -> Self {
        Self {
            jar: jar.into(),
            user: settings.user.clone(),
            tools_path: local.tools_path.clone(),
            install_path: settings.install_path.clone(),
            share_path: settings.share_path.clone(),
            net_interface: local.net_interface.clone(),
            address: None,
            nomad_port: settings.nomad_port(),
            peers: Vec::new(),
            hosts_encoding: settings.hosts_encoding,
        }
    }

    #[must_use]
    pub fn address(mut self, address: Option<Ipv4Addr>) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub fn peers(mut self, peers: Vec<PeerEndpoint>) -> Self {
        self.peers = peers;
        self
    }

    #[must_use]
    pub fn hosts_encoding(mut self, encoding: HostsEncoding) -> Self {
        self.hosts_encoding = encoding;
        self
    }

    /// Render the argument vector.
    #[must_use]
    pub fn build(self) -> InvocationSpec {
        let mut args = Vec::with_capacity(18 + self.peers.len());
        let mut flag = |name: &str, value: String| {
            args.push(name.to_string());
            args.push(value);
        };
        flag(FLAG_JAR, self.jar);
        flag(FLAG_USER, self.user);
        flag(FLAG_INSTALL, self.tools_path);
        flag(FLAG_CLARIFY, self.install_path);
        flag(FLAG_SHARE, self.share_path);
        flag(FLAG_NET, self.net_interface);
        if let Some(address) = self.address {
            flag(FLAG_ADDRESS, address.to_string());
        }
        if let Some(port) = self.nomad_port {
            flag(FLAG_NOMAD_PORT, port.to_string());
        }
        // -hosts is always present; a joined empty peer set is an empty token.
        args.push(FLAG_HOSTS.to_string());
        match self.hosts_encoding {
            HostsEncoding::Joined => args.push(
                self.peers
                    .iter()
                    .map(PeerEndpoint::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            HostsEncoding::PerPeer => {
                args.extend(self.peers.into_iter().map(|p| p.0));
            }
        }
        InvocationSpec { args }
    }
}
