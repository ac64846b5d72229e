pub mod metrics;

use crate::common::config::Algorithm;
use crate::common::error::QueryError;
use crate::common::graph::RouteGraph;
use crate::routing::structs::metrics::PathMetrics;

use petgraph::graph::NodeIndex;
use serde::Serialize;

/// Label attached to paths produced by enumerating alternatives rather than
/// by one of the search engines
pub const ENUMERATION_LABEL: &str = "All Simple Paths";

/// Container for a successful query. Cities are held as indexes into the
/// graph which produced the result, so the result is only meaningful while
/// that graph is alive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<NodeIndex>,
    /// Engine which found the path, None for enumerated alternatives
    pub algorithm: Option<Algorithm>,
    pub metrics: PathMetrics,
}

/// Details of a single route taken as part of a path, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegSummary {
    pub from: String,
    pub to: String,
    pub distance: u32,
    pub time: f64,
    pub cost: u32,
    pub mode: String,
}

/// Render-ready version of a PathResult, with indexes replaced by the
/// identifiers and names of the cities they point to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSummary {
    pub algorithm: String,
    pub cities: Vec<String>,
    pub names: Vec<String>,
    pub metrics: PathMetrics,
    pub legs: Vec<LegSummary>,
}

impl PathResult {
    /// Number of routes taken
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Human readable name of whatever produced the path
    pub fn label(&self) -> &'static str {
        match self.algorithm {
            Some(algorithm) => algorithm.label(),
            None => ENUMERATION_LABEL,
        }
    }

    /// Convert the path into a summary which can be displayed without
    /// further reference to the graph
    pub fn summarise(&self, graph: &RouteGraph) -> Result<PathSummary, QueryError> {
        let mut cities = Vec::with_capacity(self.path.len());
        let mut names = Vec::with_capacity(self.path.len());
        for inx in self.path.iter() {
            let city = graph.city(*inx).ok_or_else(|| {
                QueryError::Inconsistent(format!(
                    "city index {} is not in the graph",
                    inx.index()
                ))
            })?;
            cities.push(city.id.clone());
            names.push(city.name.clone());
        }

        let mut legs = Vec::with_capacity(self.edge_count());
        for (pos, pair) in self.path.windows(2).enumerate() {
            let route = graph.find_route(pair[0], pair[1]).ok_or_else(|| {
                QueryError::Inconsistent(format!(
                    "no route between {} and {}",
                    cities[pos],
                    cities[pos + 1]
                ))
            })?;
            legs.push(LegSummary {
                from: cities[pos].clone(),
                to: cities[pos + 1].clone(),
                distance: route.distance,
                time: route.time,
                cost: route.cost,
                mode: route.mode.clone(),
            });
        }

        Ok(PathSummary {
            algorithm: self.label().to_string(),
            cities,
            names,
            metrics: self.metrics,
            legs,
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::config::GraphConfig;

    fn get_test_graph() -> RouteGraph {
        let mut graph = RouteGraph::new(GraphConfig::default());
        graph.add_city("del", "Delhi", 28.6139, 77.2090).unwrap();
        graph.add_city("jaipur", "Jaipur", 26.9124, 75.7873).unwrap();
        graph
            .add_route("del", "jaipur", 280, 3.5, 450, "Train")
            .unwrap();
        graph
    }

    /// A summary lists every city on the path and every leg between them
    #[test]
    fn test_summarise() {
        let graph = get_test_graph();
        let result = PathResult {
            path: vec![NodeIndex::new(0), NodeIndex::new(1)],
            algorithm: Some(Algorithm::Bfs),
            metrics: PathMetrics {
                distance: 280,
                time: 3.5,
                cost: 450,
            },
        };

        let summary = result.summarise(&graph).unwrap();

        let target = PathSummary {
            algorithm: "Breadth-First Search (BFS)".to_string(),
            cities: vec!["del".to_string(), "jaipur".to_string()],
            names: vec!["Delhi".to_string(), "Jaipur".to_string()],
            metrics: result.metrics,
            legs: vec![LegSummary {
                from: "del".to_string(),
                to: "jaipur".to_string(),
                distance: 280,
                time: 3.5,
                cost: 450,
                mode: "Train".to_string(),
            }],
        };

        assert_eq!(summary, target);
        assert_eq!(result.edge_count(), 1);
    }

    /// Indexes from another graph are reported rather than skipped
    #[test]
    fn test_summarise_foreign_index() {
        let graph = get_test_graph();
        let result = PathResult {
            path: vec![NodeIndex::new(0), NodeIndex::new(7)],
            algorithm: Some(Algorithm::Dfs),
            metrics: PathMetrics::new(),
        };

        match result.summarise(&graph) {
            Err(QueryError::Inconsistent(_)) => (),
            other => panic!("Expected an inconsistency, got {other:?}"),
        }
    }

    /// Enumerated paths carry their own label instead of an engine name
    #[test]
    fn test_summarise_enumerated() {
        let graph = get_test_graph();
        let result = PathResult {
            path: vec![NodeIndex::new(1), NodeIndex::new(0)],
            algorithm: None,
            metrics: PathMetrics::new(),
        };

        let summary = result.summarise(&graph).unwrap();

        assert_eq!(summary.algorithm, ENUMERATION_LABEL);
        assert_eq!(summary.cities, vec!["jaipur", "del"]);
    }
}
