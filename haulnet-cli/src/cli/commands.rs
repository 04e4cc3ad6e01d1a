//! Command implementations and argument parsing for the haulnet CLI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use haulnet_core::{
    Graph, NetworkError, NetworkErrorCode, Route, components, find_path, min_power,
    minimum_spanning_tree,
};
use thiserror::Error;
use tracing::{info, instrument};

use crate::loader::{self, LoaderError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "haulnet",
    about = "Query a delivery network: reachability, minimal power, components, spanning forest."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print node and edge counts plus the adjacency lists.
    Summary(NetworkArgs),
    /// Find a path between two nodes within a fixed power budget.
    Path(PathArgs),
    /// Compute the minimal sufficient power between two nodes.
    MinPower(RouteArgs),
    /// Partition the network into connected components.
    Components(NetworkArgs),
    /// Build the minimum spanning forest under the power metric.
    Mst(NetworkArgs),
    /// Time min-power queries over a route list.
    Bench(BenchArgs),
}

/// Arguments for commands that only need the network file.
#[derive(Debug, Args, Clone)]
pub struct NetworkArgs {
    /// Path to the network description file.
    pub network: PathBuf,
}

/// Arguments naming a source and destination node.
#[derive(Debug, Args, Clone)]
pub struct RouteArgs {
    /// Path to the network description file.
    pub network: PathBuf,
    /// Source node.
    pub src: u64,
    /// Destination node.
    pub dest: u64,
}

/// Arguments for the budgeted path search.
#[derive(Debug, Args, Clone)]
pub struct PathArgs {
    /// Path to the network description file.
    pub network: PathBuf,
    /// Source node.
    pub src: u64,
    /// Destination node.
    pub dest: u64,
    /// Power budget the vehicle can spend per edge.
    #[arg(long)]
    pub power: f64,
}

/// Arguments for the min-power timing harness.
#[derive(Debug, Args, Clone)]
pub struct BenchArgs {
    /// Path to the network description file.
    pub network: PathBuf,
    /// Path to the route list file.
    pub routes: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading an input file failed.
    #[error(transparent)]
    Loader(#[from] LoaderError),
    /// A core query failed.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl CliError {
    /// Stable core error code, when the failure originated in the core.
    #[must_use]
    pub fn network_code(&self) -> Option<NetworkErrorCode> {
        match self {
            Self::Network(err) | Self::Loader(LoaderError::Network(err)) => Some(err.code()),
            Self::Loader(_) => None,
        }
    }
}

/// Outcome of one CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum Report {
    /// Network counts and adjacency lists.
    Summary {
        /// The loaded network.
        network: Graph<u64>,
    },
    /// Result of a budgeted path search.
    Path {
        /// Source node.
        src: u64,
        /// Destination node.
        dest: u64,
        /// Budget the search was limited to.
        power: f64,
        /// The path found, or `None` when nothing fits the budget.
        path: Option<Vec<u64>>,
    },
    /// Result of a minimal-power query.
    MinPower {
        /// Source node.
        src: u64,
        /// Destination node.
        dest: u64,
        /// The route, or `None` when the endpoints are unreachable.
        route: Option<Route<u64>>,
    },
    /// The connected-component partition.
    Components {
        /// One sorted node list per component.
        sets: Vec<Vec<u64>>,
    },
    /// The minimum spanning forest.
    Mst {
        /// The forest, carrying every node of the input.
        forest: Graph<u64>,
    },
    /// Timing results for a batch of min-power queries.
    Bench {
        /// Number of routes timed.
        routes: usize,
        /// Routes whose endpoints were unreachable.
        unreachable: usize,
        /// Total wall time across all queries.
        total: Duration,
    },
}

/// Executes one parsed command against its network file.
///
/// The recoverable outcomes — no path within a budget, unreachable
/// endpoints — surface as report contents rather than errors; only I/O,
/// format, and unknown-node failures become [`CliError`].
///
/// # Errors
///
/// Returns [`CliError`] when an input file cannot be loaded or a core
/// query fails for a non-recoverable reason.
#[instrument(skip(cli), level = "info")]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    match cli.command {
        Command::Summary(args) => {
            let network = loader::network_from_path(&args.network)?;
            Ok(Report::Summary { network })
        }
        Command::Path(args) => {
            let network = loader::network_from_path(&args.network)?;
            let path = match find_path(&network, args.src, args.dest, args.power) {
                Ok(path) => Some(path),
                Err(NetworkError::NotFound { .. }) => None,
                Err(err) => return Err(err.into()),
            };
            Ok(Report::Path {
                src: args.src,
                dest: args.dest,
                power: args.power,
                path,
            })
        }
        Command::MinPower(args) => {
            let network = loader::network_from_path(&args.network)?;
            let route = match min_power(&network, args.src, args.dest) {
                Ok(route) => Some(route),
                Err(NetworkError::Unreachable { .. }) => None,
                Err(err) => return Err(err.into()),
            };
            Ok(Report::MinPower {
                src: args.src,
                dest: args.dest,
                route,
            })
        }
        Command::Components(args) => {
            let network = loader::network_from_path(&args.network)?;
            let sets = components(&network)
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect();
            Ok(Report::Components { sets })
        }
        Command::Mst(args) => {
            let network = loader::network_from_path(&args.network)?;
            Ok(Report::Mst {
                forest: minimum_spanning_tree(&network),
            })
        }
        Command::Bench(args) => {
            let network = loader::network_from_path(&args.network)?;
            let routes = loader::routes_from_path(&args.routes)?;
            run_bench(&network, &routes)
        }
    }
}

fn run_bench(network: &Graph<u64>, routes: &[(u64, u64)]) -> Result<Report, CliError> {
    let mut unreachable = 0usize;
    let start = Instant::now();
    for &(src, dest) in routes {
        match min_power(network, src, dest) {
            Ok(_) => {}
            Err(NetworkError::Unreachable { .. }) => unreachable += 1,
            Err(err) => return Err(err.into()),
        }
    }
    let total = start.elapsed();
    info!(routes = routes.len(), unreachable, ?total, "bench finished");
    Ok(Report::Bench {
        routes: routes.len(),
        unreachable,
        total,
    })
}

/// Renders a report as the human-readable command output.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn render_report(report: &Report, writer: &mut impl Write) -> io::Result<()> {
    match report {
        Report::Summary { network } => render_summary(network, writer),
        Report::Path {
            src,
            dest,
            power,
            path,
        } => match path {
            Some(path) => writeln!(
                writer,
                "path within power budget {power}: {}",
                render_path(path)
            ),
            None => writeln!(
                writer,
                "no path connects {src} and {dest} within power budget {power}"
            ),
        },
        Report::MinPower { src, dest, route } => match route {
            Some(route) => writeln!(
                writer,
                "minimal power {}: {}",
                route.power(),
                render_path(route.path())
            ),
            None => writeln!(writer, "no finite power connects {src} and {dest}"),
        },
        Report::Components { sets } => {
            writeln!(writer, "{} components", sets.len())?;
            for (position, set) in sets.iter().enumerate() {
                let nodes: Vec<String> = set.iter().map(ToString::to_string).collect();
                writeln!(writer, "component {}: {}", position + 1, nodes.join(" "))?;
            }
            Ok(())
        }
        Report::Mst { forest } => {
            let edges = undirected_edges(forest);
            let total: f64 = edges.iter().map(|edge| edge.2).sum();
            writeln!(
                writer,
                "spanning forest: {} edges, total power {total}",
                edges.len()
            )?;
            for (left, right, power, distance) in edges {
                writeln!(
                    writer,
                    "{left} -- {right} (power {power}, distance {distance})"
                )?;
            }
            Ok(())
        }
        Report::Bench {
            routes,
            unreachable,
            total,
        } => {
            writeln!(
                writer,
                "ran {routes} min-power queries in {total:?} ({unreachable} unreachable)"
            )?;
            if *routes > 0 {
                let mean = *total / u32::try_from(*routes).unwrap_or(u32::MAX);
                writeln!(writer, "mean query time {mean:?}")?;
            }
            Ok(())
        }
    }
}

fn render_summary(network: &Graph<u64>, writer: &mut impl Write) -> io::Result<()> {
    if network.node_count() == 0 {
        return writeln!(writer, "the network is empty");
    }
    writeln!(
        writer,
        "the network has {} nodes and {} edges",
        network.node_count(),
        network.edge_count()
    )?;
    for &node in network.nodes() {
        write!(writer, "{node} ->")?;
        for link in network.neighbours(node).unwrap_or(&[]) {
            write!(
                writer,
                " ({}, power {}, distance {})",
                link.neighbour(),
                link.power(),
                link.distance()
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn render_path(path: &[u64]) -> String {
    let nodes: Vec<String> = path.iter().map(ToString::to_string).collect();
    nodes.join(" -> ")
}

/// Undirected edges of `graph`, each reported once with `left <= right`,
/// as `(left, right, power, distance)`.
fn undirected_edges(graph: &Graph<u64>) -> Vec<(u64, u64, f64, f64)> {
    let mut edges = Vec::new();
    for &node in graph.nodes() {
        for link in graph.neighbours(node).unwrap_or(&[]) {
            if node <= link.neighbour() {
                edges.push((node, link.neighbour(), link.power(), link.distance()));
            }
        }
    }
    edges
}
