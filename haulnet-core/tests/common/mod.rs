//! Shared builders for the integration suites.

use haulnet_core::Graph;

/// Builds a network from `(left, right, power)` triples with the default
/// distance.
#[must_use]
pub fn network(edges: &[(u64, u64, f64)]) -> Graph<u64> {
    let mut graph = Graph::new();
    for &(left, right, power) in edges {
        graph
            .add_edge(left, right, power, Graph::<u64>::DEFAULT_DISTANCE)
            .expect("valid edge");
    }
    graph
}
