//! Application service: local node identity.

use anyhow::{Context, Result};

use crate::application::ports::HostIdentity;
use crate::domain::{LocalNode, Topology, find_local_node};

/// Find the topology entry describing this host.
///
/// The host name is read from `host` on every call.
///
/// # Errors
///
/// Returns an error if the host name cannot be read, or
/// `IdentityError::NodeNotFound` if no entry matches it.
pub fn resolve_local_node<'a>(
    host: &impl HostIdentity,
    topology: &'a Topology,
) -> Result<LocalNode<'a>> {
    let hostname = host.hostname().context("cannot read host name")?;
    let local = find_local_node(topology, &hostname)?;
    tracing::debug!(hostname = %hostname, index = local.index, "matched local node");
    Ok(local)
}
