//! Minimum spanning forest construction under the power metric.
//!
//! Sequential Kruskal: candidates stream from the adjacency lists (each
//! undirected edge appears twice; the union check discards the second
//! appearance), stable-sorted ascending by power so equal-power edges keep
//! their discovery order.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::graph::{Graph, NodeId};
use crate::union_find::DisjointSet;

/// Builds a minimum spanning forest of `graph` under the power metric.
///
/// The result contains every node of the input. A connected input yields a
/// single spanning tree; a disconnected input yields one tree per
/// component, with isolated nodes staying edgeless. Accepted edges keep
/// both their original power and distance, and total power is minimal
/// among spanning edge selections.
#[must_use]
#[instrument(skip(graph), level = "debug")]
pub fn minimum_spanning_tree<N: NodeId>(graph: &Graph<N>) -> Graph<N> {
    let mut forest = Graph::with_nodes(graph.nodes().iter().copied());
    let index: HashMap<N, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(position, &node)| (node, position))
        .collect();

    let mut candidates = graph.edge_list();
    candidates.sort_by(|a, b| a.power.total_cmp(&b.power));

    let mut sets = DisjointSet::new(graph.node_count());
    let complete = graph.node_count().saturating_sub(1);
    let mut accepted = 0usize;
    for edge in candidates {
        let (Some(&left), Some(&right)) = (index.get(&edge.left), index.get(&edge.right)) else {
            continue;
        };
        if sets.union(left, right) {
            forest.push_link(edge.left, edge.right, edge.power, edge.distance);
            accepted += 1;
            // Only a connected input reaches n - 1 accepted edges; a
            // disconnected one runs the list out so every component gets
            // its own tree.
            if accepted == complete {
                break;
            }
        }
    }

    debug!(accepted, nodes = graph.node_count(), "spanning forest built");
    forest
}

#[cfg(test)]
mod tests;
