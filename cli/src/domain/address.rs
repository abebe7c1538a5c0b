//! IPv4 parsing and normalization.
//!
//! Interface addresses and configured literals are compared as `Ipv4Addr`
//! values, never as strings: `010.000.000.005`, `::ffff:10.0.0.5` and
//! `10.0.0.5` are the same address. Zero-padded forms only occur in
//! configured literals; interface entries arrive as typed networks.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnetwork::IpNetwork;

/// Parse an IPv4 literal, accepting leading zeros and IPv4-mapped IPv6 forms.
///
/// Returns `None` for anything that does not denote an IPv4 address.
#[must_use]
pub fn parse_ipv4_literal(literal: &str) -> Option<Ipv4Addr> {
    let literal = literal.trim();
    if let Ok(addr) = literal.parse::<Ipv4Addr>() {
        return Some(addr);
    }
    if let Some(addr) = parse_padded_dotted_quad(literal) {
        return Some(addr);
    }
    literal
        .parse::<Ipv6Addr>()
        .ok()
        .and_then(|v6| v6.to_ipv4_mapped())
}

/// Dotted decimal with zero padding, e.g. `010.000.000.005`.
///
/// Octets are read as decimal, not octal.
fn parse_padded_dotted_quad(literal: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = literal.split('.');
    for octet in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

/// The IPv4 address assigned by an interface network entry.
///
/// IPv6 entries that are not IPv4-mapped yield `None`.
#[must_use]
pub fn network_ipv4(network: &IpNetwork) -> Option<Ipv4Addr> {
    match network {
        IpNetwork::V4(v4) => Some(v4.ip()),
        IpNetwork::V6(v6) => v6.ip().to_ipv4_mapped(),
    }
}

/// Pick the first IPv4, non-loopback address from a lookup result.
#[must_use]
pub fn select_usable_ipv4(addrs: &[IpAddr]) -> Option<Ipv4Addr> {
    addrs
        .iter()
        .filter_map(|addr| match addr {
            IpAddr::V4(v4) => Some(*v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        })
        .find(|v4| !v4.is_loopback())
}

/// `true` if any network entry carries `expected`.
#[must_use]
pub fn networks_contain(networks: &[IpNetwork], expected: Ipv4Addr) -> bool {
    networks
        .iter()
        .filter_map(network_ipv4)
        .any(|addr| addr == expected)
}
