//! Application context: unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, the topology store, the host
//! adapters and the policy overrides given on the command line. Adding a new
//! cross-cutting concern requires only one field change here.

use std::path::PathBuf;

use crate::application::services::invocation::{HostPorts, PlanOptions};
use crate::domain::{AddressPolicy, HostsEncoding};
use crate::infra::config::YamlTopologyStore;
use crate::infra::fs::FsJarLocator;
use crate::infra::launcher::TokioInstallerLauncher;
use crate::infra::network::SystemHost;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Policy overrides; `None` defers to the topology file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyFlags {
    pub address_policy: Option<AddressPolicy>,
    pub hosts_encoding: Option<HostsEncoding>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Topology file location.
    pub config: PathBuf,
    /// Output rendering options.
    pub output: OutputFlags,
    /// Policy overrides.
    pub policies: PolicyFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Topology file reader.
    pub topology_store: YamlTopologyStore,
    /// Host name, DNS and interface queries.
    pub host: SystemHost,
    /// Installer jar lookup.
    pub jars: FsJarLocator,
    /// Installer process runner.
    pub launcher: TokioInstallerLauncher,
    /// Command-line policy overrides.
    pub policies: PolicyFlags,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            topology_store: YamlTopologyStore::new(flags.config),
            host: SystemHost,
            jars: FsJarLocator,
            launcher: TokioInstallerLauncher,
            policies: flags.policies,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Host ports backed by the real system.
    #[must_use]
    pub fn host_ports(&self) -> HostPorts<'_, SystemHost, SystemHost, SystemHost> {
        HostPorts {
            host: &self.host,
            resolver: &self.host,
            interfaces: &self.host,
        }
    }

    /// Progress reporter for the current output mode.
    ///
    /// JSON runs report on stderr so stdout carries only the JSON document.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        if self.is_json() {
            TerminalReporter::stderr(&self.output)
        } else {
            TerminalReporter::new(&self.output)
        }
    }

    /// Planning options built from the command-line overrides.
    #[must_use]
    pub fn plan_options<'a>(
        &self,
        reporter: &'a TerminalReporter<'a>,
    ) -> PlanOptions<'a, TerminalReporter<'a>> {
        PlanOptions {
            reporter,
            address_policy: self.policies.address_policy,
            hosts_encoding: self.policies.hosts_encoding,
        }
    }

    /// Human renderer over this context's output.
    #[must_use]
    pub fn human(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }
}
