//! Domain layer: pure node-identity logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod address;
pub mod error;
pub mod identity;
pub mod installer;
pub mod invocation;
pub mod topology;

pub use error::{AddressError, BindingError, IdentityError, InstallerError};
pub use identity::{LocalNode, find_local_node};
pub use invocation::{InvocationBuilder, InvocationSpec, PeerEndpoint};
pub use topology::{AddressPolicy, ClarifySettings, HostsEncoding, NodeDescriptor, Topology};
