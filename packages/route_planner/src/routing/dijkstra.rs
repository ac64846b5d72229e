use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::common::config::{Algorithm, Criterion};
use crate::common::error::QueryError;
use crate::common::graph::{RouteGraph, Weight};
use crate::routing::common::{no_path, reconstruct_path, resolve_endpoints};
use crate::routing::frontier::Frontier;
use crate::routing::structs::PathResult;

/// Find the path between two cities which minimises the total weight under
/// the provided criterion. The search stops as soon as the destination is
/// settled
#[tracing::instrument(skip(graph))]
pub fn dijkstra(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<PathResult, QueryError> {
    let (start_inx, end_inx) = resolve_endpoints(graph, start, end)?;

    let n_cities = graph.city_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n_cities];
    let mut visited = vec![false; n_cities];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n_cities];

    dist[start_inx.index()] = Some(0);
    let mut frontier = Frontier::new();
    frontier.push(start_inx, 0);

    while let Some(current) = frontier.pop_min() {
        // Stale entries for settled cities are skipped
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;

        if current == end_inx {
            break;
        }

        let cur_dist = match dist[current.index()] {
            Some(cur_dist) => cur_dist,
            None => continue,
        };

        for eref in graph.routes_from(current) {
            let next = eref.target();
            let new_dist =
                cur_dist.saturating_add(RouteGraph::weight(eref.weight(), criterion));

            let improved = match dist[next.index()] {
                Some(old_dist) => new_dist < old_dist,
                None => true,
            };

            if improved {
                trace!(
                    from = current.index(),
                    to = next.index(),
                    new_dist,
                    "Relaxed route"
                );
                dist[next.index()] = Some(new_dist);
                parent[next.index()] = Some(current);
                frontier.push(next, new_dist);
            }
        }
    }

    if dist[end_inx.index()].is_none() {
        return Err(no_path(start, end, Algorithm::Dijkstra));
    }

    reconstruct_path(graph, &parent, start_inx, end_inx, Algorithm::Dijkstra)
}
