use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::common::config::Algorithm;
use crate::common::error::QueryError;
use crate::common::graph::RouteGraph;
use crate::routing::common::{no_path, reconstruct_path, resolve_endpoints};
use crate::routing::structs::PathResult;

/// Find any path between two cities by exploring as deep as possible before
/// backtracking. The first path found is returned, which is not guaranteed to
/// be minimal by any measure.
///
/// Traversal uses an explicit stack of partially consumed adjacency lists,
/// visiting cities in the same order as the equivalent recursive search.
/// Parents are only recorded when a city is first discovered, so the chain
/// from the destination always follows the branch which reached it
#[tracing::instrument(skip(graph))]
pub fn dfs(
    graph: &RouteGraph,
    start: &str,
    end: &str,
) -> Result<PathResult, QueryError> {
    let (start_inx, end_inx) = resolve_endpoints(graph, start, end)?;

    let n_cities = graph.city_count();
    let mut visited = vec![false; n_cities];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n_cities];

    visited[start_inx.index()] = true;
    let mut found = start_inx == end_inx;

    let mut stack = vec![(start_inx, graph.routes_from(start_inx))];
    while !found {
        let Some((current, routes)) = stack.last_mut() else {
            break;
        };
        let current = *current;

        // Adjacency list exhausted, backtrack
        let Some(eref) = routes.next() else {
            stack.pop();
            continue;
        };

        let next = eref.target();
        if visited[next.index()] {
            continue;
        }

        visited[next.index()] = true;
        parent[next.index()] = Some(current);

        if next == end_inx {
            found = true;
        } else {
            stack.push((next, graph.routes_from(next)));
        }
    }

    if !found {
        return Err(no_path(start, end, Algorithm::Dfs));
    }

    reconstruct_path(graph, &parent, start_inx, end_inx, Algorithm::Dfs)
}
