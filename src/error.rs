use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError<NodeId> {
    #[error("Node {0:?} does not belong to the network")]
    UnknownNode(NodeId),
    #[error("Link weight must be a positive integer: {0}")]
    InvalidWeight(i64),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError<NodeId> {
    #[error(transparent)]
    Graph(#[from] GraphError<NodeId>),
    #[error("Cannot find route between {0:?} and {1:?}")]
    NotFound(NodeId, NodeId),
}

impl<NodeId> RouteError<NodeId> {
    /// Returns true if both nodes exist but no route connects them.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(..))
    }
}
