//! Text-format loaders for delivery networks and route lists.
//!
//! Network files carry a header line `n m`, then `m` records of the form
//! `node1 node2 power` or `node1 node2 power distance`; a three-field
//! record takes the default distance of 1. Nodes are named `1..=n`, so
//! isolated nodes exist even before any edge mentions them. Route lists
//! (consumed by the bench command) carry a count line followed by
//! `src dest cost` triples; the cost field is read but unused.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use haulnet_core::{Graph, NetworkError};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading network or route files.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input contained no header line.
    #[error("input is empty; expected a header line")]
    MissingHeader,
    /// The header line did not parse.
    #[error("line {line_no}: malformed header `{content}`")]
    MalformedHeader {
        /// One-based line number of the header.
        line_no: usize,
        /// The offending line.
        content: String,
    },
    /// An edge record had the wrong number of fields.
    #[error("line {line_no}: record has {fields} fields; expected 3 or 4")]
    RecordArity {
        /// One-based line number of the record.
        line_no: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },
    /// A route record had the wrong number of fields.
    #[error("line {line_no}: route record has {fields} fields; expected 3")]
    RouteArity {
        /// One-based line number of the record.
        line_no: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },
    /// A field failed to parse as a number.
    #[error("line {line_no}: could not parse field `{field}`")]
    ParseField {
        /// One-based line number of the record.
        line_no: usize,
        /// The field that failed to parse.
        field: String,
    },
    /// The input ended before the declared number of records.
    #[error("input declared {expected} records but only {found} were present")]
    TruncatedInput {
        /// Record count announced by the header.
        expected: usize,
        /// Records actually present.
        found: usize,
    },
    /// The core rejected an edge record.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Loads a delivery network from a text file.
///
/// # Errors
///
/// Returns [`LoaderError`] when the file cannot be read or its contents do
/// not follow the network format.
pub fn network_from_path(path: &Path) -> Result<Graph<u64>, LoaderError> {
    let file = open(path)?;
    network_from_reader(BufReader::new(file), path)
}

/// Loads a delivery network from any buffered reader.
///
/// `origin` only labels I/O diagnostics.
///
/// # Errors
///
/// Returns [`LoaderError`] when reading fails or the contents do not
/// follow the network format.
pub fn network_from_reader(
    reader: impl BufRead,
    origin: &Path,
) -> Result<Graph<u64>, LoaderError> {
    let mut lines = ContentLines::new(reader, origin);
    let Some((line_no, header)) = lines.next_line()? else {
        return Err(LoaderError::MissingHeader);
    };
    let (node_count, edge_count) = parse_header(line_no, &header)?;

    let mut graph = Graph::with_nodes(1..=node_count);
    let mut loaded = 0usize;
    while loaded < edge_count {
        let Some((line_no, line)) = lines.next_line()? else {
            return Err(LoaderError::TruncatedInput {
                expected: edge_count,
                found: loaded,
            });
        };
        let record = parse_record(line_no, &line)?;
        graph.add_edge(record.left, record.right, record.power, record.distance)?;
        loaded += 1;
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "network loaded"
    );
    Ok(graph)
}

/// Loads a route list: `(src, dest)` pairs for the bench harness.
///
/// # Errors
///
/// Returns [`LoaderError`] when the file cannot be read or its contents do
/// not follow the route-list format.
pub fn routes_from_path(path: &Path) -> Result<Vec<(u64, u64)>, LoaderError> {
    let file = open(path)?;
    let mut lines = ContentLines::new(BufReader::new(file), path);
    let Some((line_no, header)) = lines.next_line()? else {
        return Err(LoaderError::MissingHeader);
    };
    let route_count: usize = parse_field(line_no, header.trim())?;

    let mut routes = Vec::with_capacity(route_count);
    while routes.len() < route_count {
        let Some((line_no, line)) = lines.next_line()? else {
            return Err(LoaderError::TruncatedInput {
                expected: route_count,
                found: routes.len(),
            });
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[src, dest, _cost] = fields.as_slice() else {
            return Err(LoaderError::RouteArity {
                line_no,
                fields: fields.len(),
            });
        };
        routes.push((parse_field(line_no, src)?, parse_field(line_no, dest)?));
    }

    info!(routes = routes.len(), "route list loaded");
    Ok(routes)
}

fn open(path: &Path) -> Result<File, LoaderError> {
    File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Line iterator that skips blank lines and numbers the rest from one.
struct ContentLines<'a, R> {
    lines: io::Lines<R>,
    line_no: usize,
    origin: &'a Path,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    fn new(reader: R, origin: &'a Path) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            origin,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, LoaderError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line.map_err(|source| LoaderError::Io {
                path: self.origin.to_path_buf(),
                source,
            })?;
            if !line.trim().is_empty() {
                return Ok(Some((self.line_no, line)));
            }
        }
        Ok(None)
    }
}

fn parse_header(line_no: usize, line: &str) -> Result<(u64, usize), LoaderError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[nodes, edges] = fields.as_slice() else {
        return Err(LoaderError::MalformedHeader {
            line_no,
            content: line.to_owned(),
        });
    };
    Ok((parse_field(line_no, nodes)?, parse_field(line_no, edges)?))
}

struct EdgeRecord {
    left: u64,
    right: u64,
    power: f64,
    distance: f64,
}

fn parse_record(line_no: usize, line: &str) -> Result<EdgeRecord, LoaderError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (left, right, power, distance) = match fields.as_slice() {
        &[left, right, power] => (left, right, power, None),
        &[left, right, power, distance] => (left, right, power, Some(distance)),
        _ => {
            return Err(LoaderError::RecordArity {
                line_no,
                fields: fields.len(),
            });
        }
    };
    Ok(EdgeRecord {
        left: parse_field(line_no, left)?,
        right: parse_field(line_no, right)?,
        power: parse_field(line_no, power)?,
        distance: match distance {
            Some(distance) => parse_field(line_no, distance)?,
            None => Graph::<u64>::DEFAULT_DISTANCE,
        },
    })
}

fn parse_field<T: FromStr>(line_no: usize, field: &str) -> Result<T, LoaderError> {
    field.parse().map_err(|_| LoaderError::ParseField {
        line_no,
        field: field.to_owned(),
    })
}
