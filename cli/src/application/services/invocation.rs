//! Application service: installer invocation planning and launch.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use serde::Serialize;

use crate::application::ports::{
    HostIdentity, InstallerLauncher, InterfaceInspector, JarLocator, NameResolver,
    ProgressReporter,
};
use crate::application::services::{
    address::local_address, binding::validate_binding, identity::resolve_local_node,
    peers::build_peers,
};
use crate::domain::{
    AddressPolicy, HostsEncoding, InvocationBuilder, InvocationSpec, LocalNode, PeerEndpoint,
    Topology,
};

/// Host environment ports consulted while planning.
pub struct HostPorts<'a, H, R, I> {
    pub host: &'a H,
    pub resolver: &'a R,
    pub interfaces: &'a I,
}

/// Policy overrides; `None` falls back to the topology's `clarify-common`.
pub struct PlanOptions<'a, P: ProgressReporter> {
    pub reporter: &'a P,
    pub address_policy: Option<AddressPolicy>,
    pub hosts_encoding: Option<HostsEncoding>,
}

/// Outcome of identity resolution and binding validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeCheck {
    pub hostname: String,
    pub net_interface: String,
    /// The address proven live on `net_interface`.
    pub address: Ipv4Addr,
}

/// Everything needed to run the installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    #[serde(flatten)]
    pub node: NodeCheck,
    pub peers: Vec<PeerEndpoint>,
    pub program: PathBuf,
    pub args: InvocationSpec,
}

/// Resolve the local node and verify its interface binding.
///
/// A blank configured address is resolved through DNS before validation.
///
/// # Errors
///
/// Returns an error if the host is not in the topology, its address cannot be
/// determined, or its interface does not carry that address.
pub fn check_node<H, R, I>(
    ports: &HostPorts<'_, H, R, I>,
    topology: &Topology,
    reporter: &impl ProgressReporter,
) -> Result<NodeCheck>
where
    H: HostIdentity,
    R: NameResolver,
    I: InterfaceInspector,
{
    let (local, address) = verify_local(ports, topology, reporter)?;
    Ok(NodeCheck {
        hostname: local.node.hostname.clone(),
        net_interface: local.node.net_interface.clone(),
        address,
    })
}

fn verify_local<'a, H, R, I>(
    ports: &HostPorts<'_, H, R, I>,
    topology: &'a Topology,
    reporter: &impl ProgressReporter,
) -> Result<(LocalNode<'a>, Ipv4Addr)>
where
    H: HostIdentity,
    R: NameResolver,
    I: InterfaceInspector,
{
    let local = resolve_local_node(ports.host, topology)?;
    let node = local.node;
    reporter.step(&format!(
        "Local node: {} (net={}, tools={})",
        node.hostname, node.net_interface, node.tools_path
    ));

    if node.explicit_address().is_none() {
        tracing::debug!(hostname = %node.hostname, "no address configured; resolving through DNS");
    }
    let address = local_address(ports.resolver, node)?;
    validate_binding(ports.interfaces, &node.net_interface, address)?;
    reporter.success(&format!("{} carries {address}", node.net_interface));
    Ok((local, address))
}

/// Build the installer invocation for this host.
///
/// Either a complete plan is returned or an error; nothing is launched.
///
/// # Errors
///
/// Propagates identity, address, binding and jar location errors.
pub fn plan_invocation<H, R, I>(
    ports: &HostPorts<'_, H, R, I>,
    jars: &impl JarLocator,
    topology: &Topology,
    opts: &PlanOptions<'_, impl ProgressReporter>,
) -> Result<LaunchPlan>
where
    H: HostIdentity,
    R: NameResolver,
    I: InterfaceInspector,
{
    let settings = &topology.clarify;
    let policy = opts.address_policy.unwrap_or(settings.address_policy);
    let encoding = opts.hosts_encoding.unwrap_or(settings.hosts_encoding);

    let (local, address) = verify_local(ports, topology, opts.reporter)?;
    let peers = build_peers(ports.resolver, topology, &local.node.hostname, policy)?;
    tracing::debug!(count = peers.len(), ?policy, "built peer set");

    let jar = jars.locate(Path::new(&settings.install_path))?;
    opts.reporter.step(&format!("Installer jar: {}", jar.display()));

    let args = InvocationBuilder::new(local.node, settings, jar.to_string_lossy())
        .address(Some(address))
        .peers(peers.clone())
        .hosts_encoding(encoding)
        .build();

    Ok(LaunchPlan {
        node: NodeCheck {
            hostname: local.node.hostname.clone(),
            net_interface: local.node.net_interface.clone(),
            address,
        },
        peers,
        program: settings.installer_program(),
        args,
    })
}

/// Run the planned installer and wait for it to exit.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned.
pub async fn launch(
    launcher: &impl InstallerLauncher,
    plan: &LaunchPlan,
    reporter: &impl ProgressReporter,
) -> Result<ExitStatus> {
    reporter.step(&format!("Command: {} {}", plan.program.display(), plan.args));
    let status = launcher.launch(&plan.program, plan.args.args()).await?;
    if status.success() {
        reporter.success("Installer finished");
    } else {
        reporter.warn(&format!("Installer exited with {status}"));
    }
    Ok(status)
}
