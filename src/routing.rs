use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::{Graph, GraphError, RouteError, Weight};

mod route;

pub use route::{Route, unpack_path};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Routes heavier than this weight are never explored.
    pub max_weight: Weight,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_weight: Weight::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapElement<NodeId> {
    /// Current shortest weight from source to this node.
    weight: Weight,
    node: NodeId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<NodeId: Ord> Ord for HeapElement<NodeId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            // breaking ties in a deterministic way: smaller node first
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<NodeId: Ord> PartialOrd for HeapElement<NodeId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the minimum weight route from source to target (Dijkstra).
///
/// Returns [`RouteError::Graph`] if any of the two nodes doesn't belong to the graph, and
/// [`RouteError::NotFound`] if the target cannot be reached from the source within the config
/// bounds. A route from a node to itself is the node alone, with zero weight.
pub fn shortest_path<G: Graph>(
    config: &ShortestPathConfig,
    graph: &G,
    source: &G::NodeId,
    target: &G::NodeId,
) -> Result<Route<G::NodeId>, RouteError<G::NodeId>> {
    debug!("Computing shortest path {source:?} -> {target:?} with {config:?}");

    for node in [source, target] {
        if !graph.contains_node(node) {
            return Err(GraphError::UnknownNode(node.clone()).into());
        }
    }

    if source == target {
        return Ok(Route {
            nodes: vec![source.clone()],
            weight: Weight::ZERO,
        });
    }

    // (current) shortest weight from source to this node, a missing node is not reached yet
    let mut shortest_weights = FxHashMap::from_iter([(source.clone(), Weight::ZERO)]);

    // previous node (value) on the current best known route from source to this node (key)
    let mut previous_map: FxHashMap<G::NodeId, G::NodeId> = FxHashMap::default();

    // nodes whose shortest weight is final: they were already popped once
    let mut settled: FxHashSet<G::NodeId> = FxHashSet::default();

    // priority queue of discovered nodes that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        weight: Weight::ZERO,
        node: source.clone(),
    }]);

    while let Some(HeapElement { weight, node }) = frontier.pop() {
        if settled.contains(&node) {
            trace!("Skipping stale entry {node:?} ({weight})");
            continue;
        }

        if node == *target {
            let nodes = unpack_path(&previous_map, node);
            debug!("Found shortest path {nodes:?} ({weight})");
            return Ok(Route { nodes, weight });
        }

        trace!("Settled {node:?} ({weight})");
        settled.insert(node.clone());

        for (neighbor, link_weight) in graph.neighbors(&node)? {
            if settled.contains(neighbor) {
                continue;
            }

            let candidate = weight + *link_weight;
            if candidate > config.max_weight {
                continue;
            }

            // check if we can follow the current route to reach the neighbor in a cheaper way
            let is_shorter = shortest_weights
                .get(neighbor)
                .is_none_or(|&shortest| candidate < shortest);

            if is_shorter {
                // Relax: we have now found a better way that we are going to explore
                trace!("Relaxed {neighbor:?} via {node:?} ({candidate})");
                shortest_weights.insert(neighbor.clone(), candidate);
                previous_map.insert(neighbor.clone(), node.clone());
                frontier.push(HeapElement {
                    weight: candidate,
                    node: neighbor.clone(),
                });
            }
        }
    }

    debug!("No path found {source:?} -> {target:?}");
    Err(RouteError::NotFound(source.clone(), target.clone()))
}
