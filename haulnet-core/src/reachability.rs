//! Power-budgeted reachability over a delivery network.
//!
//! Depth-first search that only follows edges whose power requirement fits
//! the caller's budget. The search is iterative with an explicit stack and
//! a hash-set visited structure, so cyclic networks terminate and
//! membership checks stay O(1).

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::error::{NetworkError, Result};
use crate::graph::{Graph, NodeId};

/// Returns whether a path from `src` to `dest` exists using only edges
/// whose power requirement is at most `power`.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] when either endpoint is absent
/// from the graph; absence is never folded into "no path".
pub fn has_path<N: NodeId>(graph: &Graph<N>, src: N, dest: N, power: f64) -> Result<bool> {
    ensure_node(graph, src)?;
    ensure_node(graph, dest)?;
    Ok(search(graph, src, dest, power).is_some())
}

/// Returns a path from `src` to `dest` whose edges all fit the `power`
/// budget.
///
/// The search explores neighbours in adjacency-list order and returns the
/// first feasible path it completes; it makes no shortest-distance claim.
/// When `src == dest` the trivial single-node path is returned.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] when either endpoint is absent,
/// and [`NetworkError::NotFound`] when no path fits the budget.
#[instrument(skip(graph), level = "debug")]
pub fn find_path<N: NodeId>(graph: &Graph<N>, src: N, dest: N, power: f64) -> Result<Vec<N>> {
    ensure_node(graph, src)?;
    ensure_node(graph, dest)?;
    search(graph, src, dest, power).ok_or_else(|| NetworkError::not_found(src, dest, power))
}

pub(crate) fn ensure_node<N: NodeId>(graph: &Graph<N>, node: N) -> Result<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(NetworkError::unknown_node(node))
    }
}

/// Budgeted DFS on a graph whose endpoints are known to exist.
pub(crate) fn search<N: NodeId>(graph: &Graph<N>, src: N, dest: N, power: f64) -> Option<Vec<N>> {
    if src == dest {
        return Some(vec![src]);
    }

    let mut visited: HashSet<N> = HashSet::new();
    let mut parent: HashMap<N, N> = HashMap::new();
    let mut stack: Vec<(N, Option<N>)> = vec![(src, None)];

    while let Some((node, via)) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(prev) = via {
            parent.insert(node, prev);
        }
        if node == dest {
            return Some(walk_back(&parent, src, dest));
        }
        let Some(links) = graph.neighbours(node) else {
            continue;
        };
        // Reverse push keeps exploration in adjacency-list order.
        for link in links.iter().rev() {
            if link.power() <= power && !visited.contains(&link.neighbour()) {
                stack.push((link.neighbour(), Some(node)));
            }
        }
    }

    None
}

/// Reconstructs the path by walking the parent chain from `dest` to `src`.
fn walk_back<N: NodeId>(parent: &HashMap<N, N>, src: N, dest: N) -> Vec<N> {
    let mut path = vec![dest];
    let mut current = dest;
    while current != src {
        let Some(&prev) = parent.get(&current) else {
            break;
        };
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
