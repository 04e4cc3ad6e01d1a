//! Delivery-network graph analysis.
//!
//! Models a delivery network as an undirected graph whose edges carry two
//! independent non-negative weights: the minimum `power` a vehicle needs to
//! traverse the edge, and the edge `distance`. On top of the [`Graph`]
//! container the crate offers:
//!
//! - power-budgeted reachability ([`has_path`] / [`find_path`]);
//! - the minimal sufficient power between two nodes ([`min_power`]);
//! - the partition into connected components ([`components`]);
//! - a Kruskal minimum spanning forest under the power metric
//!   ([`minimum_spanning_tree`]).
//!
//! All queries take the graph by shared reference and are side-effect-free,
//! so a fully constructed graph can serve any number of concurrent readers.

mod components;
mod error;
mod graph;
mod min_power;
mod mst;
mod reachability;
mod union_find;

pub use crate::{
    components::components,
    error::{NetworkError, NetworkErrorCode, Result},
    graph::{Graph, Link, NodeId},
    min_power::{Route, min_power},
    mst::minimum_spanning_tree,
    reachability::{find_path, has_path},
};
