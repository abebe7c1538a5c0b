//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`: never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use ipnetwork::IpNetwork;

use crate::domain::Topology;

// ── Host Environment Ports ────────────────────────────────────────────────────

/// The operating system's reported host name.
pub trait HostIdentity {
    /// Current host name. Queried on every call, never cached.
    fn hostname(&self) -> Result<String>;
}

/// DNS resolution.
pub trait NameResolver {
    /// Resolve `hostname` to every address the resolver returns, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>>;
}

/// Local network-interface enumeration.
pub trait InterfaceInspector {
    /// Networks assigned to `name`: each entry is an address with its prefix.
    ///
    /// Returns `Ok(None)` when no interface with that name exists.
    fn interface_addresses(&self, name: &str) -> Result<Option<Vec<IpNetwork>>>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Supplies the shared cluster topology.
pub trait TopologyStore {
    /// Load and deserialize the topology.
    fn load(&self) -> Result<Topology>;
    /// Location the topology is read from.
    fn path(&self) -> &Path;
}

// ── Installer Ports ───────────────────────────────────────────────────────────

/// Locates the service installer artifact.
pub trait JarLocator {
    /// Path of the installer jar under `<install_path>/tools/lib`.
    ///
    /// # Errors
    ///
    /// Returns `InstallerError::InvalidInstallDir` when `install_path` does
    /// not exist and `InstallerError::JarNotFound` when nothing matches.
    fn locate(&self, install_path: &Path) -> Result<PathBuf>;
}

/// Runs the installer process.
#[allow(async_fn_in_trait)]
pub trait InstallerLauncher {
    /// Run `program` with `args` as a literal argument vector and wait for it.
    async fn launch(&self, program: &Path, args: &[String]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
