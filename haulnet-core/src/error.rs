//! Error types for the haulnet core library.
//!
//! Defines the error enum exposed by the public API, a stable
//! machine-readable code per variant, and a convenient result alias.

use std::fmt;

use thiserror::Error;

/// An error produced by graph construction or query operations.
///
/// Every failure is pure: the graph is never left partially mutated, and no
/// operation retries internally. [`NetworkError::Unreachable`] and
/// [`NetworkError::NotFound`] are expected, recoverable outcomes that
/// callers must handle explicitly.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// A query referenced a node that is not present in the graph.
    #[error("node `{node}` is not present in the graph")]
    UnknownNode {
        /// Display form of the missing node identifier.
        node: String,
    },
    /// No finite power connects the two endpoints: they sit in different
    /// connected components.
    #[error("no path connects `{src}` and `{dest}` at any power")]
    Unreachable {
        /// Display form of the source node.
        src: String,
        /// Display form of the destination node.
        dest: String,
    },
    /// An edge was supplied with a negative or non-finite weight.
    #[error("edge ({left}, {right}) has invalid weights: power {power}, distance {distance}")]
    InvalidEdge {
        /// Display form of the first endpoint.
        left: String,
        /// Display form of the second endpoint.
        right: String,
        /// Power requirement supplied by the caller.
        power: f64,
        /// Distance supplied by the caller.
        distance: f64,
    },
    /// No path fits one specific power budget. Distinct from
    /// [`NetworkError::Unreachable`], which means no budget would do.
    #[error("no path connects `{src}` and `{dest}` within power budget {budget}")]
    NotFound {
        /// Display form of the source node.
        src: String,
        /// Display form of the destination node.
        dest: String,
        /// Power budget the search was limited to.
        budget: f64,
    },
}

impl NetworkError {
    pub(crate) fn unknown_node(node: impl fmt::Display) -> Self {
        Self::UnknownNode {
            node: node.to_string(),
        }
    }

    pub(crate) fn unreachable(src: impl fmt::Display, dest: impl fmt::Display) -> Self {
        Self::Unreachable {
            src: src.to_string(),
            dest: dest.to_string(),
        }
    }

    pub(crate) fn invalid_edge(
        left: impl fmt::Display,
        right: impl fmt::Display,
        power: f64,
        distance: f64,
    ) -> Self {
        Self::InvalidEdge {
            left: left.to_string(),
            right: right.to_string(),
            power,
            distance,
        }
    }

    pub(crate) fn not_found(
        src: impl fmt::Display,
        dest: impl fmt::Display,
        budget: f64,
    ) -> Self {
        Self::NotFound {
            src: src.to_string(),
            dest: dest.to_string(),
            budget,
        }
    }

    /// Returns the stable, machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> NetworkErrorCode {
        match self {
            Self::UnknownNode { .. } => NetworkErrorCode::UnknownNode,
            Self::Unreachable { .. } => NetworkErrorCode::Unreachable,
            Self::InvalidEdge { .. } => NetworkErrorCode::InvalidEdge,
            Self::NotFound { .. } => NetworkErrorCode::NotFound,
        }
    }
}

/// Machine-readable error codes for [`NetworkError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum NetworkErrorCode {
    /// A query referenced a node absent from the graph.
    UnknownNode,
    /// The endpoints sit in different connected components.
    Unreachable,
    /// An edge weight was negative or non-finite.
    InvalidEdge,
    /// No path fit the given power budget.
    NotFound,
}

impl NetworkErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownNode => "UNKNOWN_NODE",
            Self::Unreachable => "UNREACHABLE",
            Self::InvalidEdge => "INVALID_EDGE",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for NetworkErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
