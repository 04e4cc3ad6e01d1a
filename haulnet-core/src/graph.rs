//! Adjacency-list container for delivery networks.
//!
//! A [`Graph`] records an undirected, edge-weighted network. Every edge is
//! stored symmetrically in both endpoints' adjacency lists, and node
//! insertion order is preserved so traversals have reproducible tie-breaks.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use crate::error::{NetworkError, Result};

/// Identifier for a node in a delivery network.
///
/// Blanket-implemented for every type that is cheap to copy, hashable,
/// totally ordered, and printable. Integer identifiers are typical, but
/// nothing assumes contiguity.
pub trait NodeId: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// One adjacency entry: the far endpoint of an edge and the edge weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link<N> {
    neighbour: N,
    power: f64,
    distance: f64,
}

impl<N: NodeId> Link<N> {
    /// Returns the far endpoint of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbour(&self) -> N { self.neighbour }

    /// Returns the minimum power required to traverse the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn power(&self) -> f64 { self.power }

    /// Returns the edge length.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> f64 { self.distance }
}

/// A directed view of one stored link, streamed by [`Graph::edge_list`].
///
/// Each undirected edge yields two records, one per endpoint.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeRecord<N> {
    pub(crate) left: N,
    pub(crate) right: N,
    pub(crate) power: f64,
    pub(crate) distance: f64,
}

/// An undirected, edge-weighted delivery network.
///
/// Construction is append-only: nodes may be seeded up front via
/// [`Graph::with_nodes`] and edges accumulate through [`Graph::add_edge`];
/// nothing is ever removed. Queries only read the structure, so a fully
/// built graph can be shared freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<N: NodeId> {
    nodes: Vec<N>,
    adjacency: HashMap<N, Vec<Link<N>>>,
    edge_count: usize,
}

impl<N: NodeId> Graph<N> {
    /// Distance recorded for an edge whose source record omits one.
    pub const DEFAULT_DISTANCE: f64 = 1.0;

    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph containing `nodes` and no edges.
    ///
    /// Duplicate identifiers are inserted once.
    #[must_use]
    pub fn with_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert_node(node);
        }
        graph
    }

    /// Adds the undirected edge `{left, right}` with the given weights.
    ///
    /// Endpoints absent from the graph are inserted implicitly. Parallel
    /// edges are permitted and each counts as one more edge; they are
    /// harmless to the queries beyond redundant candidates.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidEdge`] when `power` or `distance` is
    /// negative or non-finite. The graph is untouched on failure.
    pub fn add_edge(&mut self, left: N, right: N, power: f64, distance: f64) -> Result<()> {
        if !is_valid_weight(power) || !is_valid_weight(distance) {
            return Err(NetworkError::invalid_edge(left, right, power, distance));
        }
        self.push_link(left, right, power, distance);
        Ok(())
    }

    /// Appends symmetric links for an already-validated edge.
    pub(crate) fn push_link(&mut self, left: N, right: N, power: f64, distance: f64) {
        self.insert_node(left);
        self.insert_node(right);
        if let Some(links) = self.adjacency.get_mut(&left) {
            links.push(Link {
                neighbour: right,
                power,
                distance,
            });
        }
        if let Some(links) = self.adjacency.get_mut(&right) {
            links.push(Link {
                neighbour: left,
                power,
                distance,
            });
        }
        self.edge_count += 1;
    }

    fn insert_node(&mut self, node: N) {
        if let Entry::Vacant(slot) = self.adjacency.entry(node) {
            slot.insert(Vec::new());
            self.nodes.push(node);
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of undirected edges added so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Node identifiers in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns whether `node` is present in the graph.
    #[must_use]
    pub fn contains(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Adjacency list of `node` in edge insertion order, or `None` when the
    /// node is absent.
    #[must_use]
    pub fn neighbours(&self, node: N) -> Option<&[Link<N>]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    /// Every stored link as a directed record, nodes in insertion order.
    ///
    /// Each undirected edge appears twice, once per endpoint; consumers
    /// that need each edge once must deduplicate themselves (the MST
    /// builder's union check does so implicitly).
    pub(crate) fn edge_list(&self) -> Vec<EdgeRecord<N>> {
        let mut records = Vec::with_capacity(self.edge_count * 2);
        for &node in &self.nodes {
            if let Some(links) = self.adjacency.get(&node) {
                for link in links {
                    records.push(EdgeRecord {
                        left: node,
                        right: link.neighbour,
                        power: link.power,
                        distance: link.distance,
                    });
                }
            }
        }
        records
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
