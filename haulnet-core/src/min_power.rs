//! Minimal sufficient power between two nodes.
//!
//! Feasibility of the budgeted search is monotonically non-decreasing in
//! the budget: a path that exists at power `p` exists at any `p' >= p`.
//! That invariant lets the minimum be located by binary search over the
//! sorted distinct edge-power values, with the depth-first search as the
//! feasibility oracle.

use tracing::{debug, instrument};

use crate::error::{NetworkError, Result};
use crate::graph::{Graph, NodeId};
use crate::reachability::{ensure_node, search};

/// A feasible route: the node path and the minimal power that admits it.
#[derive(Clone, Debug, PartialEq)]
pub struct Route<N> {
    path: Vec<N>,
    power: f64,
}

impl<N: NodeId> Route<N> {
    /// Nodes along the route, source first.
    #[must_use]
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Minimal power sufficient to traverse the route.
    #[must_use]
    #[rustfmt::skip]
    pub const fn power(&self) -> f64 { self.power }

    /// Splits the route into its path and power.
    #[must_use]
    pub fn into_parts(self) -> (Vec<N>, f64) {
        (self.path, self.power)
    }
}

/// Computes the minimum power budget for which a path connects `src` and
/// `dest`, together with a path feasible at exactly that budget.
///
/// When `src == dest` the minimum power is `0` and the path is the single
/// node.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] when either endpoint is absent,
/// and [`NetworkError::Unreachable`] when the endpoints sit in different
/// connected components, i.e. no finite power would connect them.
#[instrument(skip(graph), level = "debug")]
pub fn min_power<N: NodeId>(graph: &Graph<N>, src: N, dest: N) -> Result<Route<N>> {
    ensure_node(graph, src)?;
    ensure_node(graph, dest)?;
    if src == dest {
        return Ok(Route {
            path: vec![src],
            power: 0.0,
        });
    }

    let powers = distinct_powers(graph);
    let Some(&max_power) = powers.last() else {
        // No edges at all: distinct endpoints cannot meet.
        return Err(NetworkError::unreachable(src, dest));
    };
    if search(graph, src, dest, max_power).is_none() {
        return Err(NetworkError::unreachable(src, dest));
    }

    // Feasibility is monotone in the budget, so the candidates form a
    // false..false true..true sequence; find the first true.
    let mut lo = 0;
    let mut hi = powers.len() - 1;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let feasible = powers
            .get(mid)
            .is_some_and(|&p| search(graph, src, dest, p).is_some());
        if feasible {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    let power = powers.get(lo).copied().unwrap_or(max_power);
    debug!(candidates = powers.len(), power, "minimal feasible power located");
    let path =
        search(graph, src, dest, power).ok_or_else(|| NetworkError::not_found(src, dest, power))?;
    Ok(Route { path, power })
}

/// Distinct edge-power values, ascending.
fn distinct_powers<N: NodeId>(graph: &Graph<N>) -> Vec<f64> {
    let mut powers: Vec<f64> = graph.edge_list().iter().map(|edge| edge.power).collect();
    powers.sort_unstable_by(|a, b| a.total_cmp(b));
    powers.dedup_by(|a, b| a.total_cmp(b).is_eq());
    powers
}
