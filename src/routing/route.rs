use std::fmt;

use rustc_hash::FxHashMap;

use crate::Weight;

/// Minimum weight route between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<NodeId> {
    /// Visited nodes, from the source to the target (both included).
    pub nodes: Vec<NodeId>,
    /// Sum of the weights of all the links followed by the route.
    pub weight: Weight,
}

impl<NodeId> Route<NodeId> {
    pub fn source(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&NodeId> {
        self.nodes.last()
    }

    /// Returns the number of links followed by the route.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl<NodeId: fmt::Display> fmt::Display for Route<NodeId> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{node}")?;
        }

        write!(f, " (total {})", self.weight)
    }
}

/// Unpacks the route from the target back to the source.
pub fn unpack_path<NodeId: Clone + Eq + std::hash::Hash>(
    previous_map: &FxHashMap<NodeId, NodeId>,
    target: NodeId,
) -> Vec<NodeId> {
    let mut nodes = vec![target.clone()];
    let mut next = target;

    while let Some(previous) = previous_map.get(&next) {
        next = previous.clone();
        nodes.push(previous.clone());
    }

    nodes.reverse();
    nodes
}
