use std::fmt::Debug;
use std::hash::Hash;

use crate::{GraphError, Weight};

/// Uniquely identify a node (location) of a network.
/// Ordering is only used to break ties between equally distant nodes.
pub trait NodeId: Debug + Clone + Ord + Hash {}

impl<T: Debug + Clone + Ord + Hash> NodeId for T {}

/// Undirected weighted graph.
/// Exposes the adjacency view the shortest path search runs on.
pub trait Graph {
    /// Uniquely identify a node that belongs to the graph.
    type NodeId: NodeId;

    /// Returns true only if the node belongs to the graph.
    fn contains_node(&self, node: &Self::NodeId) -> bool;

    /// Gets all the links leaving the given node, in insertion order.
    /// Each link is the neighbor reached and the weight of the link.
    fn neighbors(
        &self,
        node: &Self::NodeId,
    ) -> Result<&[(Self::NodeId, Weight)], GraphError<Self::NodeId>>;

    /// Returns the number of links leaving the node, 0 if the node doesn't belong to the graph.
    fn node_degree(&self, node: &Self::NodeId) -> usize {
        self.neighbors(node).map_or(0, <[_]>::len)
    }
}

pub mod network;
pub mod observer;
