mod graph;

use std::cell::RefCell;

use routenet::{
    AddNode, GraphError, Network, NetworkObserver, Route, RouteError, TracingObserver, Weight,
};
use test_log::test;

use crate::graph::{abcd_network, build_network};

fn w(units: u64) -> Weight {
    Weight::from_units(units)
}

#[derive(Debug, Default)]
struct RouteLog(RefCell<Vec<String>>);

impl NetworkObserver<&'static str> for RouteLog {
    fn route_found(&self, route: &Route<&'static str>) {
        self.0.borrow_mut().push(route.to_string());
    }

    fn route_failed(&self, error: &RouteError<&'static str>) {
        self.0.borrow_mut().push(error.to_string());
    }
}

#[test]
fn network_add_node_001() {
    let mut network = abcd_network();
    let before = network.list_network();

    assert_eq!(network.add_node("B"), AddNode::AlreadyExists);
    assert_eq!(network.list_network(), before);
    assert_eq!(network.node_count(), 4);
    assert_eq!(network.edge_count(), 4);
}

#[test]
fn network_add_edge_001() {
    let network = abcd_network();

    for (a, b, weight) in [("A", "B", 6), ("B", "C", 4), ("A", "C", 15), ("C", "D", 5)] {
        assert!(network.neighbors(&a).unwrap().contains(&(b, w(weight))));
        assert!(network.neighbors(&b).unwrap().contains(&(a, w(weight))));
    }

    let entries: usize = network
        .list_network()
        .iter()
        .map(|(_, links)| links.len())
        .sum();
    assert_eq!(entries, 2 * network.edge_count());
}

#[test]
fn network_add_edge_002() {
    let mut network = abcd_network();
    let before = network.list_network();

    assert_eq!(
        network.add_edge("A", "Z", 3),
        Err(GraphError::UnknownNode("Z"))
    );
    assert_eq!(
        network.add_edge("Z", "A", 3),
        Err(GraphError::UnknownNode("Z"))
    );
    assert_eq!(network.list_network(), before);
    assert!(!network.contains_node(&"Z"));
}

#[test]
fn network_add_edge_003() {
    let mut network = abcd_network();
    let before = network.list_network();

    for weight in [0, -1, i64::MIN] {
        assert_eq!(
            network.add_edge("A", "D", weight),
            Err(GraphError::InvalidWeight(weight))
        );
    }
    assert_eq!(network.list_network(), before);
    assert_eq!(network.edge_count(), 4);
}

#[test]
fn network_neighbors_001() {
    let network = abcd_network();

    assert_eq!(network.neighbors(&"A").unwrap(), [("B", w(6)), ("C", w(15))]);
    assert_eq!(
        network.neighbors(&"C").unwrap(),
        [("B", w(4)), ("A", w(15)), ("D", w(5))]
    );
    assert_eq!(network.neighbors(&"E"), Err(GraphError::UnknownNode("E")));
}

#[test]
fn network_list_network_001() {
    let network = build_network(["B", "A", "C"], [("A", "B", 2)]);

    assert_eq!(
        network.list_network(),
        [
            ("B", vec![("A", w(2))]),
            ("A", vec![("B", w(2))]),
            ("C", vec![]),
        ]
    );
    assert_eq!(network.to_string(), "B → A (2)\nA → B (2)\nC → ");
}

#[test]
fn network_observer_001() {
    let mut network = Network::with_observer(RouteLog::default());
    for node in ["A", "B", "C"] {
        network.add_node(node);
    }
    network.add_edge("A", "B", 6).unwrap();

    network.find_shortest_path(&"A", &"B").unwrap();
    network.find_shortest_path(&"A", &"C").unwrap_err();
    network.find_shortest_path(&"A", &"Z").unwrap_err();

    assert_eq!(
        *network.observer().0.borrow(),
        [
            "A → B (total 6)",
            "Cannot find route between \"A\" and \"C\"",
            "Node \"Z\" does not belong to the network",
        ]
    );
}

#[test]
fn network_observer_002() {
    // the observer never changes the outcome of an operation
    let mut network = Network::with_observer(TracingObserver);
    assert_eq!(network.add_node("A"), AddNode::Added);
    assert_eq!(network.add_node("A"), AddNode::AlreadyExists);
    network.add_node("B");
    network.add_edge("A", "B", 1).unwrap();
    assert_eq!(
        network.add_edge("A", "B", 0),
        Err(GraphError::InvalidWeight(0))
    );

    let route = network.find_shortest_path(&"B", &"A").unwrap();
    assert_eq!(route.nodes, ["B", "A"]);
}

#[test]
fn network_observer_003() {
    let log = RouteLog::default();
    let mut network = Network::with_observer(&log);
    network.add_node("A");
    network.find_shortest_path(&"A", &"A").unwrap();
    drop(network);

    assert_eq!(*log.0.borrow(), ["A (total 0)"]);
}
