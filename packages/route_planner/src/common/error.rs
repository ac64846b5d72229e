//! Error types shared across the crate.
//!
//! Construction errors are raised while a graph is being populated, query
//! errors are the typed outcomes of a path search which did not produce a
//! path.

use crate::common::config::Algorithm;

/// Errors raised while adding cities or routes to a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A city with this identifier has already been added
    #[error("city '{0}' already exists")]
    DuplicateKey(String),

    /// The configured city limit has been reached
    #[error("graph is full: limit of {0} cities reached")]
    CapacityExceeded(usize),

    /// A route refers to a city which is not in the graph
    #[error("unknown city '{0}'")]
    UnknownCity(String),

    /// Travel times must be finite and non-negative
    #[error("route {from} -> {to} has invalid travel time {time}")]
    InvalidRoute { from: String, to: String, time: f64 },
}

/// Outcomes of a path query which did not produce a path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Either endpoint is not in the graph, no traversal was attempted
    #[error("unknown city '{0}'")]
    UnknownCity(String),

    /// The destination cannot be reached from the start
    #[error("no path from '{start}' to '{end}' using {algorithm}")]
    NoPathExists {
        start: String,
        end: String,
        algorithm: Algorithm,
    },

    /// Traversal state could not be turned back into a path. This indicates
    /// a defect rather than a property of the graph
    #[error("inconsistent traversal state: {0}")]
    Inconsistent(String),
}

/// Errors raised while parsing user or environment provided settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognised algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unrecognised criterion '{0}'")]
    UnknownCriterion(String),

    #[error("invalid value '{value}' for {name}")]
    InvalidSetting { name: &'static str, value: String },
}

/// Errors raised while building a graph from a network document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
