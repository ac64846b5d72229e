use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::common::config::Algorithm;
use crate::common::error::QueryError;
use crate::common::graph::RouteGraph;
use crate::routing::common::{no_path, reconstruct_path, resolve_endpoints};
use crate::routing::structs::PathResult;

/// Find the path between two cities with the fewest routes. Route weights
/// are ignored. Cities are marked as visited when they are queued, so each
/// city is queued at most once
#[tracing::instrument(skip(graph))]
pub fn bfs(
    graph: &RouteGraph,
    start: &str,
    end: &str,
) -> Result<PathResult, QueryError> {
    let (start_inx, end_inx) = resolve_endpoints(graph, start, end)?;

    let n_cities = graph.city_count();
    let mut visited = vec![false; n_cities];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n_cities];

    let mut queue = VecDeque::<NodeIndex>::new();
    queue.push_back(start_inx);
    visited[start_inx.index()] = true;

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == end_inx {
            found = true;
            break;
        }

        for eref in graph.routes_from(current) {
            let next = eref.target();
            if !visited[next.index()] {
                visited[next.index()] = true;
                parent[next.index()] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !found {
        return Err(no_path(start, end, Algorithm::Bfs));
    }

    reconstruct_path(graph, &parent, start_inx, end_inx, Algorithm::Bfs)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::config::GraphConfig;

    /// A chain of short hops from Delhi to Mumbai alongside a single long
    /// flight
    fn get_test_graph() -> RouteGraph {
        let mut graph = RouteGraph::new(GraphConfig::default());
        graph.add_city("del", "Delhi", 28.6139, 77.2090).unwrap();
        graph.add_city("jaipur", "Jaipur", 26.9124, 75.7873).unwrap();
        graph.add_city("ahm", "Ahmedabad", 23.0225, 72.5714).unwrap();
        graph.add_city("mum", "Mumbai", 19.0760, 72.8777).unwrap();
        graph.add_city("pb", "Port Blair", 11.6234, 92.7265).unwrap();

        graph
            .add_route("del", "jaipur", 280, 3.5, 450, "Train")
            .unwrap();
        graph
            .add_route("jaipur", "ahm", 640, 9.0, 1200, "Train")
            .unwrap();
        graph.add_route("ahm", "mum", 530, 7.0, 950, "Train").unwrap();
        graph
            .add_route("del", "mum", 1400, 2.5, 3500, "Flight")
            .unwrap();
        graph
    }

    /// The flight is a single hop, so it is preferred despite the distance
    #[test]
    fn test_fewest_hops() {
        let graph = get_test_graph();

        let result = bfs(&graph, "del", "mum").unwrap();

        assert_eq!(result.path, vec![NodeIndex::new(0), NodeIndex::new(3)]);
        assert_eq!(result.algorithm, Some(Algorithm::Bfs));
        assert_eq!(result.metrics.distance, 1400);
        assert_eq!(result.edge_count(), 1);
    }

    /// Intermediate cities are reached with the minimum number of hops
    #[test]
    fn test_two_hops() {
        let graph = get_test_graph();

        let result = bfs(&graph, "jaipur", "mum").unwrap();

        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.path.first(), Some(&NodeIndex::new(1)));
        assert_eq!(result.path.last(), Some(&NodeIndex::new(3)));
    }

    #[test]
    fn test_same_city() {
        let graph = get_test_graph();

        let result = bfs(&graph, "del", "del").unwrap();

        assert_eq!(result.path, vec![NodeIndex::new(0)]);
        assert_eq!(result.metrics.cost, 0);
    }

    #[test]
    fn test_no_path() {
        let graph = get_test_graph();

        let result = bfs(&graph, "mum", "pb");

        assert_eq!(
            result,
            Err(QueryError::NoPathExists {
                start: "mum".to_string(),
                end: "pb".to_string(),
                algorithm: Algorithm::Bfs,
            })
        );
    }

    #[test]
    fn test_unknown_city() {
        let graph = get_test_graph();

        let result = bfs(&graph, "del", "xyz");

        assert_eq!(result, Err(QueryError::UnknownCity("xyz".to_string())));
    }
}
