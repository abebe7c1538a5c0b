//! Local node identity: which topology entry describes this host.

use crate::domain::error::IdentityError;
use crate::domain::topology::{NodeDescriptor, Topology};

/// The topology entry identified as describing the current host.
///
/// Borrowed from the [`Topology`]; never copied out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalNode<'a> {
    /// Position of the entry in `clarify-nodes`.
    pub index: usize,
    /// The matching descriptor.
    pub node: &'a NodeDescriptor,
}

/// Returns the first node whose hostname equals `hostname` exactly.
///
/// No case folding and no DNS canonicalization: `Node-A` does not match
/// `node-a`.
///
/// # Errors
///
/// Returns [`IdentityError::NodeNotFound`] if no entry matches.
pub fn find_local_node<'a>(
    topology: &'a Topology,
    hostname: &str,
) -> Result<LocalNode<'a>, IdentityError> {
    topology
        .nodes
        .iter()
        .enumerate()
        .find(|(_, n)| n.hostname == hostname)
        .map(|(index, node)| LocalNode { index, node })
        .ok_or_else(|| IdentityError::NodeNotFound {
            hostname: hostname.to_string(),
        })
}
