//! Application service: peer endpoint set.

use anyhow::Result;

use crate::application::ports::NameResolver;
use crate::application::services::address::node_address;
use crate::domain::{AddressPolicy, PeerEndpoint, Topology};

/// Every node except the local one, in topology order.
///
/// Only the first entry named `local_hostname` is skipped; later duplicates
/// are listed as peers. A peer's explicit address is used when present;
/// otherwise `policy` decides between its bare hostname
/// ([`AddressPolicy::Literal`]) and its DNS-resolved address
/// ([`AddressPolicy::Resolve`]).
///
/// # Errors
///
/// Propagates literal parsing and DNS resolution errors.
pub fn build_peers(
    resolver: &impl NameResolver,
    topology: &Topology,
    local_hostname: &str,
    policy: AddressPolicy,
) -> Result<Vec<PeerEndpoint>> {
    let mut skipped_local = false;
    let mut peers = Vec::with_capacity(topology.nodes.len().saturating_sub(1));
    for node in &topology.nodes {
        if !skipped_local && node.hostname == local_hostname {
            skipped_local = true;
            continue;
        }
        let endpoint = match node_address(resolver, node, policy)? {
            Some(addr) => addr.to_string(),
            None => node.hostname.clone(),
        };
        peers.push(PeerEndpoint::new(endpoint));
    }
    Ok(peers)
}
