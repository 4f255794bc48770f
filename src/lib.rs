#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::{GraphError, RouteError};
pub use graph::network::{AddNode, Network};
pub use graph::observer::{NetworkObserver, NoObserver, TracingObserver};
pub use graph::{Graph, NodeId};
pub use model::Weight;
pub use routing::{Route, ShortestPathConfig, shortest_path};
