//! Application service: hostname and literal address resolution.

use std::net::Ipv4Addr;

use anyhow::Result;

use crate::application::ports::NameResolver;
use crate::domain::address::{parse_ipv4_literal, select_usable_ipv4};
use crate::domain::{AddressError, AddressPolicy, NodeDescriptor};

/// Resolve `hostname` through DNS to its first IPv4, non-loopback address.
///
/// # Errors
///
/// Returns `AddressError::LookupFailed` if the lookup errors and
/// `AddressError::NoUsableAddress` if it only yields loopback or IPv6.
pub fn resolve_address(resolver: &impl NameResolver, hostname: &str) -> Result<Ipv4Addr> {
    let addrs = resolver
        .lookup(hostname)
        .map_err(|e| AddressError::LookupFailed {
            hostname: hostname.to_string(),
            reason: format!("{e:#}"),
        })?;
    let addr = select_usable_ipv4(&addrs).ok_or_else(|| AddressError::NoUsableAddress {
        hostname: hostname.to_string(),
    })?;
    tracing::debug!(hostname, %addr, candidates = addrs.len(), "resolved address");
    Ok(addr)
}

/// Parse a node's configured literal.
///
/// # Errors
///
/// Returns `AddressError::InvalidAddress` if `literal` is not IPv4.
pub fn parse_literal(node: &NodeDescriptor, literal: &str) -> Result<Ipv4Addr> {
    parse_ipv4_literal(literal).ok_or_else(|| {
        AddressError::InvalidAddress {
            hostname: node.hostname.clone(),
            value: literal.to_string(),
        }
        .into()
    })
}

/// The address the local node claims.
///
/// An explicit literal always wins and DNS is never consulted for it. A blank
/// address is resolved through DNS whatever the address policy, since the
/// result must still be proven live on the node's interface.
///
/// # Errors
///
/// Propagates literal parsing and DNS resolution errors.
pub fn local_address(resolver: &impl NameResolver, node: &NodeDescriptor) -> Result<Ipv4Addr> {
    match node.explicit_address() {
        Some(literal) => parse_literal(node, literal),
        None => resolve_address(resolver, &node.hostname),
    }
}

/// The address a peer is known by, according to `policy`.
///
/// An explicit literal always wins and DNS is never consulted for it. A blank
/// address is resolved under [`AddressPolicy::Resolve`] and left unset under
/// [`AddressPolicy::Literal`].
///
/// # Errors
///
/// Propagates literal parsing and DNS resolution errors.
pub fn node_address(
    resolver: &impl NameResolver,
    node: &NodeDescriptor,
    policy: AddressPolicy,
) -> Result<Option<Ipv4Addr>> {
    match (node.explicit_address(), policy) {
        (Some(literal), _) => parse_literal(node, literal).map(Some),
        (None, AddressPolicy::Resolve) => resolve_address(resolver, &node.hostname).map(Some),
        (None, AddressPolicy::Literal) => Ok(None),
    }
}
