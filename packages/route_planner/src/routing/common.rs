//! Logic shared by all of the search engines: resolving query endpoints,
//! turning parent pointers back into a measured path, and dispatching a
//! query to the requested engine.

use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use tracing::{debug, error};

use crate::common::config::{Algorithm, Criterion};
use crate::common::error::QueryError;
use crate::common::graph::{RouteGraph, Weight};
use crate::routing::astar::astar;
use crate::routing::bfs::bfs;
use crate::routing::dfs::dfs;
use crate::routing::dijkstra::dijkstra;
use crate::routing::structs::PathResult;
use crate::routing::structs::metrics::PathMetrics;

/// Look up the indexes of both query endpoints. Unknown cities are reported
/// before any traversal takes place
pub fn resolve_endpoints(
    graph: &RouteGraph,
    start: &str,
    end: &str,
) -> Result<(NodeIndex, NodeIndex), QueryError> {
    let start_inx = graph
        .find_index(start)
        .ok_or_else(|| QueryError::UnknownCity(start.to_string()))?;
    let end_inx = graph
        .find_index(end)
        .ok_or_else(|| QueryError::UnknownCity(end.to_string()))?;
    Ok((start_inx, end_inx))
}

/// Build the error returned when a search completes without reaching the
/// destination
pub fn no_path(start: &str, end: &str, algorithm: Algorithm) -> QueryError {
    debug!(start, end, %algorithm, "No path found");
    QueryError::NoPathExists {
        start: start.to_string(),
        end: end.to_string(),
        algorithm,
    }
}

/// Log and build an inconsistency error. These point at a defect in one of
/// the engines rather than a property of the graph
fn inconsistent(msg: String) -> QueryError {
    error!(%msg, "Traversal state is inconsistent");
    QueryError::Inconsistent(msg)
}

/// Measure an ordered list of cities, summing the attributes of the first
/// route found between each consecutive pair. `algorithm` is None for paths
/// which were enumerated rather than searched for
pub fn measure_path(
    graph: &RouteGraph,
    path: Vec<NodeIndex>,
    algorithm: Option<Algorithm>,
) -> Result<PathResult, QueryError> {
    let mut metrics = PathMetrics::new();
    for pair in path.windows(2) {
        match graph.find_route(pair[0], pair[1]) {
            Some(route) => metrics.take_step(route),
            None => {
                return Err(inconsistent(format!(
                    "no route from index {} to index {}",
                    pair[0].index(),
                    pair[1].index()
                )));
            }
        }
    }

    Ok(PathResult {
        path,
        algorithm,
        metrics,
    })
}

/// Follow parent pointers back from `end` until `start` is reached, then
/// measure the resulting path
pub fn reconstruct_path(
    graph: &RouteGraph,
    parent: &[Option<NodeIndex>],
    start: NodeIndex,
    end: NodeIndex,
    algorithm: Algorithm,
) -> Result<PathResult, QueryError> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        // A chain longer than the number of cities can only be a cycle
        if path.len() > parent.len() {
            return Err(inconsistent(format!(
                "parent chain from index {} loops without reaching index {}",
                end.index(),
                start.index()
            )));
        }

        current = match parent.get(current.index()).copied().flatten() {
            Some(prev) => prev,
            None => {
                return Err(inconsistent(format!(
                    "parent chain broken at index {}",
                    current.index()
                )));
            }
        };
        path.push(current);
    }

    path.reverse();
    measure_path(graph, path, Some(algorithm))
}

/// Find a path between two cities using the requested algorithm. The
/// criterion is only used by weighted algorithms
#[tracing::instrument(skip(graph, algorithm), fields(algorithm = %algorithm))]
pub fn find_path(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    algorithm: Algorithm,
    criterion: Criterion,
) -> Result<PathResult, QueryError> {
    if !algorithm.is_weighted() {
        debug!(?criterion, "Criterion ignored by unweighted search");
    }

    match algorithm {
        Algorithm::Dijkstra => dijkstra(graph, start, end, criterion),
        Algorithm::AStar => astar(graph, start, end, criterion),
        Algorithm::Bfs => bfs(graph, start, end),
        Algorithm::Dfs => dfs(graph, start, end),
    }
}

/// Run every algorithm against the same query. The graph is only read, so
/// the searches are distributed across threads with Rayon. Results are
/// returned in the order given by Algorithm::ALL
pub fn compare_algorithms(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Vec<(Algorithm, Result<PathResult, QueryError>)> {
    Algorithm::ALL
        .par_iter()
        .map(|algorithm| {
            (
                *algorithm,
                find_path(graph, start, end, *algorithm, criterion),
            )
        })
        .collect()
}

/// Total weight of a sequence of cities under the provided criterion. If
/// any consecutive pair is not connected, None is returned. The total
/// saturates at Weight::MAX
pub fn path_weight(
    graph: &RouteGraph,
    path: &[NodeIndex],
    criterion: Criterion,
) -> Option<Weight> {
    path.windows(2).try_fold(0, |total: Weight, pair| {
        graph
            .find_route(pair[0], pair[1])
            .map(|route| total.saturating_add(RouteGraph::weight(route, criterion)))
    })
}
