use std::fmt;

use rustc_hash::FxHashMap;
use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::graph::observer::{NetworkObserver, NoObserver};
use crate::routing::{ShortestPathConfig, shortest_path};
use crate::{Graph, GraphError, NodeId, Route, RouteError, Weight};

/// Outcome of inserting a node into the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AddNode {
    /// The node was not in the network and has been inserted.
    Added,
    /// The node was already in the network, its links are untouched.
    AlreadyExists,
}

impl AddNode {
    pub const fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Network of locations connected by weighted, bidirectional links.
///
/// Every link (a, b, w) is stored twice: (b, w) in the adjacency list of a and (a, w) in the
/// adjacency list of b. Nodes and links are kept in insertion order.
#[derive(Debug, Clone)]
pub struct Network<N, O = NoObserver> {
    /// Position of each node in the adjacency lists.
    index: FxHashMap<N, usize>,
    adjacency: Vec<(N, Vec<(N, Weight)>)>,
    edge_count: usize,
    observer: O,
}

impl<N: NodeId> Default for Network<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Network<N> {
    pub fn new() -> Self {
        Self::with_observer(NoObserver)
    }
}

impl<N: NodeId, O: NetworkObserver<N>> Network<N, O> {
    /// Creates an empty network that notifies the observer of every insertion and query.
    pub fn with_observer(observer: O) -> Self {
        Self {
            index: FxHashMap::default(),
            adjacency: vec![],
            edge_count: 0,
            observer,
        }
    }

    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Inserts the node if absent.
    /// Inserting a node twice is not an error, the second insertion reports
    /// [`AddNode::AlreadyExists`] and leaves the network unchanged.
    pub fn add_node(&mut self, node: N) -> AddNode {
        let outcome = if self.index.contains_key(&node) {
            self.observer.node_exists(&node);
            AddNode::AlreadyExists
        } else {
            self.observer.node_added(&node);
            self.index.insert(node.clone(), self.adjacency.len());
            self.adjacency.push((node.clone(), vec![]));
            AddNode::Added
        };

        debug!("Insert node {node:?}: {outcome}");
        outcome
    }

    /// Inserts a bidirectional link between two existing nodes.
    ///
    /// Fails without modifying the network if any of the two nodes doesn't belong to the network
    /// or if the weight is not strictly positive.
    pub fn add_edge(&mut self, a: N, b: N, weight: i64) -> Result<(), GraphError<N>> {
        let (index_a, index_b, weight) = match self.validate_edge(&a, &b, weight) {
            Ok(validated) => validated,
            Err(error) => {
                debug!("Rejected link {a:?} <-> {b:?}: {error}");
                self.observer.edge_rejected(&error);
                return Err(error);
            }
        };

        self.adjacency[index_a].1.push((b.clone(), weight));
        self.adjacency[index_b].1.push((a.clone(), weight));
        self.edge_count += 1;

        self.observer.edge_added(&a, &b, weight);
        Ok(())
    }

    fn validate_edge(
        &self,
        a: &N,
        b: &N,
        weight: i64,
    ) -> Result<(usize, usize, Weight), GraphError<N>> {
        let index_of = |node: &N| {
            self.index
                .get(node)
                .copied()
                .ok_or_else(|| GraphError::UnknownNode(node.clone()))
        };

        let index_a = index_of(a)?;
        let index_b = index_of(b)?;

        let weight = u64::try_from(weight)
            .ok()
            .filter(|&units| units > 0)
            .map(Weight::from_units)
            .ok_or(GraphError::InvalidWeight(weight))?;

        Ok((index_a, index_b, weight))
    }

    /// Finds the minimum weight route between two nodes of the network.
    pub fn find_shortest_path(&self, source: &N, target: &N) -> Result<Route<N>, RouteError<N>> {
        self.find_shortest_path_with(&ShortestPathConfig::default(), source, target)
    }

    /// Finds the minimum weight route between two nodes of the network that doesn't exceed the
    /// bounds of the given config.
    pub fn find_shortest_path_with(
        &self,
        config: &ShortestPathConfig,
        source: &N,
        target: &N,
    ) -> Result<Route<N>, RouteError<N>> {
        let result = shortest_path(config, self, source, target);

        match &result {
            Ok(route) => self.observer.route_found(route),
            Err(error) => self.observer.route_failed(error),
        }

        result
    }
}

impl<N: NodeId, O> Network<N, O> {
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Gets the links of the node as (neighbor, weight) pairs, in insertion order.
    pub fn neighbors(&self, node: &N) -> Result<&[(N, Weight)], GraphError<N>> {
        self.index
            .get(node)
            .map(|&i| self.adjacency[i].1.as_slice())
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }

    /// Gets an iterator over all the nodes, in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> {
        self.adjacency.iter().map(|(node, _)| node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of bidirectional links, each of them counted once.
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Takes a snapshot of every node together with its links.
    pub fn list_network(&self) -> Vec<(N, Vec<(N, Weight)>)> {
        self.adjacency.clone()
    }
}

impl<N: NodeId, O> Graph for Network<N, O> {
    type NodeId = N;

    fn contains_node(&self, node: &N) -> bool {
        Network::contains_node(self, node)
    }

    fn neighbors(&self, node: &N) -> Result<&[(N, Weight)], GraphError<N>> {
        Network::neighbors(self, node)
    }
}

/// One line per node: `A → B (6), C (15)`.
impl<N: NodeId + fmt::Display, O> fmt::Display for Network<N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (node, links)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{node} → ")?;
            for (j, (neighbor, weight)) in links.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor} ({weight})")?;
            }
        }

        Ok(())
    }
}
