//! Hooks notified about every change and query of a [`Network`](crate::Network).
//!
//! Observers only receive notifications: returned values never depend on them.

use std::fmt::Debug;

use tracing::{info, warn};

use crate::{GraphError, Route, RouteError, Weight};

pub trait NetworkObserver<NodeId> {
    /// A new node was inserted.
    fn node_added(&self, _node: &NodeId) {}

    /// The node was already in the network, nothing changed.
    fn node_exists(&self, _node: &NodeId) {}

    /// A symmetric link was inserted between the two nodes.
    fn edge_added(&self, _a: &NodeId, _b: &NodeId, _weight: Weight) {}

    /// A link was rejected and the network was left untouched.
    fn edge_rejected(&self, _error: &GraphError<NodeId>) {}

    fn route_found(&self, _route: &Route<NodeId>) {}

    fn route_failed(&self, _error: &RouteError<NodeId>) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<NodeId> NetworkObserver<NodeId> for NoObserver {}

/// Observer that forwards every notification to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<NodeId: Debug> NetworkObserver<NodeId> for TracingObserver {
    fn node_added(&self, node: &NodeId) {
        info!("Node {node:?} added");
    }

    fn node_exists(&self, node: &NodeId) {
        info!("Node {node:?} already exists");
    }

    fn edge_added(&self, a: &NodeId, b: &NodeId, weight: Weight) {
        info!("Link added: {a:?} <-> {b:?} ({weight})");
    }

    fn edge_rejected(&self, error: &GraphError<NodeId>) {
        warn!("Link rejected: {error}");
    }

    fn route_found(&self, route: &Route<NodeId>) {
        info!(
            "Route found {:?} -> {:?}: {:?} (total {})",
            route.source(),
            route.target(),
            route.nodes,
            route.weight
        );
    }

    fn route_failed(&self, error: &RouteError<NodeId>) {
        warn!("No route: {error}");
    }
}

impl<NodeId, O: NetworkObserver<NodeId>> NetworkObserver<NodeId> for &O {
    fn node_added(&self, node: &NodeId) {
        (**self).node_added(node);
    }

    fn node_exists(&self, node: &NodeId) {
        (**self).node_exists(node);
    }

    fn edge_added(&self, a: &NodeId, b: &NodeId, weight: Weight) {
        (**self).edge_added(a, b, weight);
    }

    fn edge_rejected(&self, error: &GraphError<NodeId>) {
        (**self).edge_rejected(error);
    }

    fn route_found(&self, route: &Route<NodeId>) {
        (**self).route_found(route);
    }

    fn route_failed(&self, error: &RouteError<NodeId>) {
        (**self).route_failed(error);
    }
}
