//! JSON output helpers.
//!
//! Used by every `--json` code path, including the error object printed when
//! a command fails.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{AddressError, BindingError, IdentityError, InstallerError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Pretty-print any serializable value.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Stable machine-readable code for a failed run.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<IdentityError>() {
        return match e {
            IdentityError::NodeNotFound { .. } => "node_not_found",
        };
    }
    if let Some(e) = err.downcast_ref::<AddressError>() {
        return match e {
            AddressError::LookupFailed { .. } => "lookup_failed",
            AddressError::NoUsableAddress { .. } => "no_usable_address",
            AddressError::InvalidAddress { .. } => "invalid_address",
        };
    }
    if err.downcast_ref::<BindingError>().is_some() {
        return "binding_mismatch";
    }
    if let Some(e) = err.downcast_ref::<InstallerError>() {
        return match e {
            InstallerError::InvalidInstallDir { .. } => "invalid_install_dir",
            InstallerError::JarNotFound { .. } => "jar_not_found",
        };
    }
    "error"
}
