//! Application service: interface binding validation.
//!
//! Refuses to continue when the configured interface does not actually carry
//! the node's address on this host. A mismatch is a misconfiguration, so
//! there is no retry.

use std::net::Ipv4Addr;

use anyhow::{Context, Result};

use crate::application::ports::InterfaceInspector;
use crate::domain::BindingError;
use crate::domain::address::networks_contain;

/// Check that `interface` carries `expected`.
///
/// A missing interface is treated as one with no addresses.
///
/// # Errors
///
/// Returns an error if interfaces cannot be enumerated, or
/// `BindingError::Mismatch` if no assigned address equals `expected`.
pub fn validate_binding(
    inspector: &impl InterfaceInspector,
    interface: &str,
    expected: Ipv4Addr,
) -> Result<()> {
    let networks = inspector
        .interface_addresses(interface)
        .with_context(|| format!("cannot enumerate addresses of interface {interface}"))?
        .unwrap_or_else(|| {
            tracing::debug!(interface, "interface not present on host");
            Vec::new()
        });

    if networks_contain(&networks, expected) {
        tracing::debug!(interface, %expected, "interface binding verified");
        return Ok(());
    }
    Err(BindingError::Mismatch {
        interface: interface.to_string(),
        expected: expected.to_string(),
        found: networks.iter().map(ToString::to_string).collect(),
    }
    .into())
}
