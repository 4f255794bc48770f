#![allow(dead_code)]

use routenet::Network;

/// Builds a network from its nodes and links, in insertion order.
pub fn build_network<const N: usize, const E: usize>(
    nodes: [&'static str; N],
    edges: [(&'static str, &'static str, i64); E],
) -> Network<&'static str> {
    let mut network = Network::new();
    for node in nodes {
        network.add_node(node);
    }
    for (a, b, weight) in edges {
        network.add_edge(a, b, weight).unwrap();
    }
    network
}

//  A --6-- B --4-- C --5-- D
//   \_______15____/
pub fn abcd_network() -> Network<&'static str> {
    build_network(
        ["A", "B", "C", "D"],
        [("A", "B", 6), ("B", "C", 4), ("A", "C", 15), ("C", "D", 5)],
    )
}

//  X --10-- Y
pub fn xy_network() -> Network<&'static str> {
    build_network(["X", "Y"], [("X", "Y", 10)])
}

//  A --1-- B      C --2-- D      E
pub fn disconnected_network() -> Network<&'static str> {
    build_network(["A", "B", "C", "D", "E"], [("A", "B", 1), ("C", "D", 2)])
}

// Airports and flight times (minutes)
pub fn flight_network() -> Network<&'static str> {
    build_network(
        ["JFK", "LAX", "ORD", "ATL", "DFW", "SEA", "MIA"],
        [
            ("JFK", "ORD", 120),
            ("JFK", "ATL", 150),
            ("ORD", "LAX", 240),
            ("ATL", "DFW", 130),
            ("DFW", "LAX", 180),
            ("ORD", "SEA", 250),
            ("SEA", "LAX", 150),
            ("ATL", "MIA", 110),
            ("MIA", "DFW", 170),
            ("JFK", "LAX", 400),
        ],
    )
}
