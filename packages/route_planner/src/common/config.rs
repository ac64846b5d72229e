//! This module contains the structs which represent the query options
//! selected by the end user, along with the graph level settings read from
//! the environment. The QueryConfig struct is used by the server to decide
//! which search to run, while GraphConfig informs how a graph is populated.

use crate::common::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default number of paths returned when enumerating all paths between two
/// cities
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Sets the search algorithm used to answer a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// All algorithms, in the order they are reported when comparing
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Human readable name of the algorithm, attached to every path result
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::AStar => "A* Algorithm",
            Algorithm::Bfs => "Breadth-First Search (BFS)",
            Algorithm::Dfs => "Depth-First Search (DFS)",
        }
    }

    /// Whether the algorithm takes edge weights into account. BFS and DFS
    /// ignore the requested criterion entirely
    pub fn is_weighted(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Algorithm, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(ConfigError::UnknownAlgorithm(input.to_string())),
        }
    }
}

/// Sets the route attribute which is minimised by weighted searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    #[default]
    Distance,
    Time,
    Cost,
}

impl FromStr for Criterion {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Criterion, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "distance" => Ok(Criterion::Distance),
            "time" => Ok(Criterion::Time),
            "cost" => Ok(Criterion::Cost),
            _ => Err(ConfigError::UnknownCriterion(input.to_string())),
        }
    }
}

/// Settings which control how a graph is populated
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphConfig {
    /// When false, every route is added in both directions
    pub directed: bool,
    /// Optional upper bound on the number of cities
    pub max_cities: Option<usize>,
}

impl GraphConfig {
    /// Read graph settings from RP_DIRECTED and RP_MAX_CITIES. Unset
    /// variables fall back to an undirected graph with no city limit
    pub fn from_env() -> Result<GraphConfig, ConfigError> {
        GraphConfig::from_vars(
            env::var("RP_DIRECTED").ok(),
            env::var("RP_MAX_CITIES").ok(),
        )
    }

    /// Parse graph settings from raw (optional) string values
    pub fn from_vars(
        directed: Option<String>,
        max_cities: Option<String>,
    ) -> Result<GraphConfig, ConfigError> {
        let directed = match directed {
            Some(val) => match val.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidSetting {
                        name: "RP_DIRECTED",
                        value: val,
                    });
                }
            },
            None => false,
        };

        let max_cities = match max_cities {
            Some(val) => match val.parse::<usize>() {
                Ok(limit) => Some(limit),
                Err(_) => {
                    return Err(ConfigError::InvalidSetting {
                        name: "RP_MAX_CITIES",
                        value: val,
                    });
                }
            },
            None => None,
        };

        Ok(GraphConfig {
            directed,
            max_cities,
        })
    }
}

/// Stores the user's requested query exactly as it is received from the API
#[derive(Deserialize, Debug, PartialEq)]
pub struct UserQueryConfig {
    pub start: String,
    pub end: String,
    pub algorithm: Option<String>,
    pub criterion: Option<String>,
    pub max_paths: Option<usize>,
}

/// Stores the user's requested query in a format which can be used in the
/// rest of this package. Users should first create a UserQueryConfig and
/// use .try_into() to convert to QueryConfig
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub start: String,
    pub end: String,
    pub algorithm: Algorithm,
    pub criterion: Criterion,
    pub max_paths: usize,
}

impl TryFrom<UserQueryConfig> for QueryConfig {
    type Error = ConfigError;

    fn try_from(user: UserQueryConfig) -> Result<QueryConfig, Self::Error> {
        let algorithm = match user.algorithm {
            Some(name) => Algorithm::from_str(&name)?,
            None => Algorithm::Dijkstra,
        };

        let criterion = match user.criterion {
            Some(name) => Criterion::from_str(&name)?,
            None => Criterion::default(),
        };

        Ok(QueryConfig {
            start: user.start,
            end: user.end,
            algorithm,
            criterion,
            max_paths: user.max_paths.unwrap_or(DEFAULT_MAX_PATHS),
        })
    }
}
