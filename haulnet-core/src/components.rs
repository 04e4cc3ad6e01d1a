//! Connected-component partition of a delivery network.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, instrument};

use crate::graph::{Graph, NodeId};
use crate::union_find::DisjointSet;

/// Partitions the graph's nodes into maximal connected subsets.
///
/// Edge powers are ignored: any edge connects its endpoints. The returned
/// sets are pairwise disjoint and cover every node exactly once, ordered by
/// the first appearance of each component's earliest-inserted node.
///
/// Implemented as union-find over the edge list, O((V+E) α(V)).
#[must_use]
#[instrument(skip(graph), level = "debug")]
pub fn components<N: NodeId>(graph: &Graph<N>) -> Vec<BTreeSet<N>> {
    let index: HashMap<N, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(position, &node)| (node, position))
        .collect();

    let mut sets = DisjointSet::new(graph.node_count());
    for edge in graph.edge_list() {
        if let (Some(&left), Some(&right)) = (index.get(&edge.left), index.get(&edge.right)) {
            sets.union(left, right);
        }
    }

    let mut slot_by_root: HashMap<usize, usize> = HashMap::new();
    let mut partition: Vec<BTreeSet<N>> = Vec::new();
    for (position, &node) in graph.nodes().iter().enumerate() {
        let root = sets.find(position);
        let next_slot = partition.len();
        let slot = *slot_by_root.entry(root).or_insert(next_slot);
        if slot == next_slot {
            partition.push(BTreeSet::new());
        }
        if let Some(set) = partition.get_mut(slot) {
            set.insert(node);
        }
    }

    debug!(
        nodes = graph.node_count(),
        components = partition.len(),
        "partition computed"
    );
    partition
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::components;
    use crate::graph::Graph;

    fn as_set_of_sets(partition: Vec<BTreeSet<u64>>) -> BTreeSet<BTreeSet<u64>> {
        partition.into_iter().collect()
    }

    #[test]
    fn two_triangles_give_two_components() {
        let mut graph: Graph<u64> = Graph::new();
        for (left, right) in [(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)] {
            graph.add_edge(left, right, 1.0, 1.0).expect("valid edge");
        }

        let expected: BTreeSet<BTreeSet<u64>> = [
            BTreeSet::from([1, 2, 3]),
            BTreeSet::from([4, 5, 6]),
        ]
        .into_iter()
        .collect();
        assert_eq!(as_set_of_sets(components(&graph)), expected);
    }

    #[test]
    fn isolated_nodes_form_singletons() {
        let graph: Graph<u64> = Graph::with_nodes([7, 8]);
        let expected: BTreeSet<BTreeSet<u64>> =
            [BTreeSet::from([7]), BTreeSet::from([8])].into_iter().collect();
        assert_eq!(as_set_of_sets(components(&graph)), expected);
    }

    #[test]
    fn powers_do_not_affect_connectivity() {
        let mut graph: Graph<u64> = Graph::new();
        graph.add_edge(1, 2, 1_000_000.0, 1.0).expect("valid edge");
        let partition = components(&graph);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.first(), Some(&BTreeSet::from([1, 2])));
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph: Graph<u64> = Graph::new();
        assert!(components(&graph).is_empty());
    }
}
