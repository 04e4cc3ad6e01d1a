//! Unit tests for the Kruskal spanning-forest builder.

use rstest::rstest;

use super::minimum_spanning_tree;
use crate::components::components;
use crate::graph::Graph;
use crate::union_find::DisjointSet;

fn network(edges: &[(u64, u64, f64)]) -> Graph<u64> {
    let mut graph = Graph::new();
    for &(left, right, power) in edges {
        graph
            .add_edge(left, right, power, Graph::<u64>::DEFAULT_DISTANCE)
            .expect("valid edge");
    }
    graph
}

/// Undirected edges of `graph`, each reported once as `(left, right, power,
/// distance)` with `left <= right`.
fn undirected_edges(graph: &Graph<u64>) -> Vec<(u64, u64, f64, f64)> {
    let mut edges = Vec::new();
    for &node in graph.nodes() {
        for link in graph.neighbours(node).expect("listed node present") {
            if node <= link.neighbour() {
                edges.push((node, link.neighbour(), link.power(), link.distance()));
            }
        }
    }
    edges
}

fn total_power(graph: &Graph<u64>) -> f64 {
    undirected_edges(graph).iter().map(|edge| edge.2).sum()
}

/// Asserts the forest is acyclic and has `nodes - components` edges.
fn assert_forest_shape(forest: &Graph<u64>) {
    let nodes = forest.nodes();
    let index = |node: u64| {
        nodes
            .iter()
            .position(|&candidate| candidate == node)
            .expect("edge endpoint present")
    };
    let mut sets = DisjointSet::new(nodes.len());
    let mut accepted = 0usize;
    for (left, right, _, _) in undirected_edges(forest) {
        assert!(
            sets.union(index(left), index(right)),
            "forest contains a cycle through ({left}, {right})"
        );
        accepted += 1;
    }
    let component_count = components(forest).len();
    assert_eq!(accepted, nodes.len() - component_count);
}

#[test]
fn a_chain_is_its_own_spanning_tree() {
    let graph = network(&[(1, 2, 4.0), (2, 3, 4.0), (3, 4, 4.0)]);
    let forest = minimum_spanning_tree(&graph);

    assert_eq!(forest.edge_count(), 3);
    assert_eq!(total_power(&forest), 12.0);
    assert_forest_shape(&forest);
}

#[test]
fn the_heaviest_triangle_edge_is_dropped() {
    let graph = network(&[(1, 2, 1.0), (2, 3, 2.0), (3, 1, 5.0)]);
    let forest = minimum_spanning_tree(&graph);

    assert_eq!(forest.edge_count(), 2);
    assert_eq!(total_power(&forest), 3.0);
    assert_forest_shape(&forest);
}

#[test]
fn disconnected_input_yields_one_tree_per_component() {
    let graph = network(&[
        (1, 2, 1.0),
        (2, 3, 2.0),
        (3, 1, 3.0),
        (4, 5, 1.0),
        (5, 6, 2.0),
        (6, 4, 3.0),
    ]);
    let forest = minimum_spanning_tree(&graph);

    assert_eq!(forest.node_count(), 6);
    assert_eq!(forest.edge_count(), 4);
    assert_eq!(components(&forest).len(), 2);
    assert_forest_shape(&forest);
}

#[test]
fn a_single_edgeless_node_survives() {
    let graph: Graph<u64> = Graph::with_nodes([42]);
    let forest = minimum_spanning_tree(&graph);

    assert_eq!(forest.nodes(), &[42]);
    assert_eq!(forest.edge_count(), 0);
}

#[test]
fn isolated_nodes_are_carried_alongside_a_tree() {
    let mut graph: Graph<u64> = Graph::with_nodes([9]);
    graph.add_edge(1, 2, 3.0, 1.0).expect("valid edge");
    let forest = minimum_spanning_tree(&graph);

    assert!(forest.contains(9));
    assert_eq!(forest.node_count(), 3);
    assert_eq!(forest.edge_count(), 1);
}

#[test]
fn distances_are_carried_through() {
    let mut graph: Graph<u64> = Graph::new();
    graph.add_edge(1, 2, 4.0, 17.5).expect("valid edge");
    let forest = minimum_spanning_tree(&graph);

    let edges = undirected_edges(&forest);
    assert_eq!(edges, vec![(1, 2, 4.0, 17.5)]);
}

#[test]
fn parallel_edges_contribute_only_the_cheapest() {
    let graph = network(&[(1, 2, 9.0), (1, 2, 2.0)]);
    let forest = minimum_spanning_tree(&graph);

    assert_eq!(forest.edge_count(), 1);
    assert_eq!(total_power(&forest), 2.0);
}

#[rstest]
#[case::square_with_diagonals(
    &[(1, 2, 1.0), (2, 3, 2.0), (3, 4, 3.0), (4, 1, 6.0), (1, 3, 10.0), (2, 4, 10.0)],
    6.0
)]
#[case::equal_weights(&[(1, 2, 5.0), (2, 3, 5.0), (3, 1, 5.0)], 10.0)]
fn total_power_matches_the_known_minimum(
    #[case] edges: &[(u64, u64, f64)],
    #[case] expected: f64,
) {
    let graph = network(edges);
    let forest = minimum_spanning_tree(&graph);
    assert_eq!(total_power(&forest), expected);
    assert_forest_shape(&forest);
}
