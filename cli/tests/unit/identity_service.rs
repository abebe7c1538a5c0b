//! Tests for local node identity resolution.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use clarify_launcher::application::services::identity::resolve_local_node;
use clarify_launcher::domain::IdentityError;

use crate::mocks::{FakeHost, node, three_nodes, topology};

#[test]
fn test_resolve_local_node_matches_reported_hostname() {
    let topo = three_nodes();
    let local = resolve_local_node(&FakeHost::named("node-b"), &topo).expect("found");
    assert_eq!(local.index, 1);
    assert_eq!(local.node.hostname, "node-b");
}

#[test]
fn test_resolve_local_node_unknown_host_is_node_not_found() {
    let topo = three_nodes();
    let err = resolve_local_node(&FakeHost::named("stranger"), &topo).unwrap_err();
    assert_eq!(
        err.downcast_ref::<IdentityError>(),
        Some(&IdentityError::NodeNotFound {
            hostname: "stranger".to_string()
        })
    );
}

#[test]
fn test_resolve_local_node_hostname_failure_propagates() {
    let topo = three_nodes();
    let err = resolve_local_node(&FakeHost::failing(), &topo).unwrap_err();
    assert!(format!("{err:#}").contains("cannot read host name"));
}

#[test]
fn test_resolve_local_node_queries_host_each_call() {
    let topo = three_nodes();
    let host = FakeHost::named("node-a");
    resolve_local_node(&host, &topo).expect("first");
    resolve_local_node(&host, &topo).expect("second");
    assert_eq!(host.calls(), 2);
}

#[test]
fn test_resolve_local_node_duplicate_picks_first() {
    let topo = topology(vec![
        node("dup", "eth0", "10.0.0.5"),
        node("dup", "eth1", "10.0.0.9"),
    ]);
    let local = resolve_local_node(&FakeHost::named("dup"), &topo).expect("found");
    assert_eq!(local.index, 0);
    assert_eq!(local.node.net_interface, "eth0");
}
