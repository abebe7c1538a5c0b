//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. Every variant is fatal to the run.

use thiserror::Error;

// ── Identity errors ───────────────────────────────────────────────────────────

/// Errors raised while matching the running host against the topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error(
        "Node not found: no entry in clarify-nodes has hostname '{hostname}'. \
Add this host to the topology or fix its hostname."
    )]
    NodeNotFound { hostname: String },
}

// ── Address errors ────────────────────────────────────────────────────────────

/// Errors raised while turning a hostname or literal into an IPv4 address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("DNS lookup for '{hostname}' failed: {reason}")]
    LookupFailed { hostname: String, reason: String },

    #[error("No usable address for '{hostname}': lookup returned only loopback or non-IPv4 results")]
    NoUsableAddress { hostname: String },

    #[error("Invalid address '{value}' for node '{hostname}': expected an IPv4 literal")]
    InvalidAddress { hostname: String, value: String },
}

// ── Binding errors ────────────────────────────────────────────────────────────

/// Errors raised when a configured interface does not carry the node's address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error(
        "Binding mismatch: interface '{interface}' does not carry {expected} (found: {})",
        found_list(found)
    )]
    Mismatch {
        interface: String,
        expected: String,
        found: Vec<String>,
    },
}

fn found_list(found: &[String]) -> String {
    if found.is_empty() {
        "no addresses".to_string()
    } else {
        found.join(", ")
    }
}

// ── Installer artifact errors ─────────────────────────────────────────────────

/// Errors raised while locating the installer jar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallerError {
    #[error("Invalid install dir: {path} does not exist")]
    InvalidInstallDir { path: String },

    #[error("Unable to locate service installer jar ({pattern}*) under {dir}")]
    JarNotFound { dir: String, pattern: String },
}
