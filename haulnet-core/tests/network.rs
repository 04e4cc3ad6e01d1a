//! End-to-end scenarios over the public API.

mod common;

use std::collections::BTreeSet;

use haulnet_core::{
    Graph, NetworkError, components, find_path, has_path, min_power, minimum_spanning_tree,
};
use rstest::rstest;

use common::network;

#[test]
fn linear_chain_needs_the_bottleneck_power() {
    let graph = network(&[(1, 2, 4.0), (2, 3, 4.0), (3, 4, 4.0)]);
    let route = min_power(&graph, 1, 4).expect("chain is connected");
    assert_eq!(route.path(), &[1, 2, 3, 4]);
    assert_eq!(route.power(), 4.0);
}

#[test]
fn disjoint_triangles_partition_and_stay_unreachable() {
    let graph = network(&[
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 1, 1.0),
        (4, 5, 1.0),
        (5, 6, 1.0),
        (6, 4, 1.0),
    ]);

    let partition: BTreeSet<BTreeSet<u64>> = components(&graph).into_iter().collect();
    let expected: BTreeSet<BTreeSet<u64>> = [
        BTreeSet::from([1, 2, 3]),
        BTreeSet::from([4, 5, 6]),
    ]
    .into_iter()
    .collect();
    assert_eq!(partition, expected);

    let err = min_power(&graph, 1, 4).expect_err("triangles are disjoint");
    assert!(matches!(err, NetworkError::Unreachable { .. }));
}

#[test]
fn single_node_network() {
    let graph: Graph<u64> = Graph::with_nodes([1]);

    assert_eq!(components(&graph), vec![BTreeSet::from([1])]);

    let forest = minimum_spanning_tree(&graph);
    assert_eq!(forest.nodes(), &[1]);
    assert_eq!(forest.edge_count(), 0);
}

#[test]
fn route_to_self_is_free() {
    let graph = network(&[(1, 2, 8.0)]);
    let route = min_power(&graph, 1, 1).expect("trivial route");
    assert_eq!(route.path(), &[1]);
    assert_eq!(route.power(), 0.0);
}

#[rstest]
#[case::chain(&[(1, 2, 4.0), (2, 3, 4.0), (3, 4, 4.0)], 1, 4)]
#[case::detour(&[(1, 3, 10.0), (1, 2, 2.0), (2, 3, 2.0)], 1, 3)]
#[case::mixed(&[(1, 2, 3.0), (2, 3, 11.0), (3, 4, 7.0), (1, 4, 20.0)], 1, 4)]
fn min_power_round_trips_through_has_path(
    #[case] edges: &[(u64, u64, f64)],
    #[case] src: u64,
    #[case] dest: u64,
) {
    let graph = network(edges);
    let route = min_power(&graph, src, dest).expect("connected pair");

    assert!(has_path(&graph, src, dest, route.power()).expect("known nodes"));
    if route.power() > 0.0 {
        assert!(!has_path(&graph, src, dest, route.power() - 1.0).expect("known nodes"));
    }

    // The returned path itself fits the returned budget edge by edge.
    let replay = find_path(&graph, src, dest, route.power()).expect("path at minimal power");
    assert_eq!(replay, route.path());
}

#[test]
fn queries_leave_the_graph_untouched() {
    let graph = network(&[(1, 2, 4.0), (2, 3, 6.0)]);
    let before = graph.clone();

    let _ = min_power(&graph, 1, 3).expect("connected");
    let _ = components(&graph);
    let _ = minimum_spanning_tree(&graph);
    let _ = has_path(&graph, 1, 3, 6.0).expect("known nodes");

    assert_eq!(graph, before);
}

#[test]
fn unknown_nodes_are_distinct_from_unreachable() {
    let graph = network(&[(1, 2, 1.0)]);

    let err = min_power(&graph, 1, 7).expect_err("node 7 absent");
    assert!(matches!(err, NetworkError::UnknownNode { .. }));

    let err = find_path(&graph, 7, 1, 5.0).expect_err("node 7 absent");
    assert!(matches!(err, NetworkError::UnknownNode { .. }));
}
