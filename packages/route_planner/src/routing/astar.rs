use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::common::config::{Algorithm, Criterion};
use crate::common::error::QueryError;
use crate::common::graph::{RouteGraph, Weight};
use crate::routing::common::{no_path, reconstruct_path, resolve_endpoints};
use crate::routing::frontier::Frontier;
use crate::routing::structs::PathResult;

/// Estimated remaining weight from a city to the destination. The estimate
/// is the great-circle distance in km, rounded down, whatever the criterion
fn estimate(graph: &RouteGraph, from: NodeIndex, to: NodeIndex) -> Weight {
    graph.heuristic(from, to).floor() as Weight
}

/// Dijkstra's algorithm, with the frontier ordered by accumulated weight
/// plus the great-circle distance to the destination. The result is only
/// guaranteed to be optimal for the distance criterion; for time and cost
/// the estimate is in the wrong units and may overshoot
#[tracing::instrument(skip(graph))]
pub fn astar(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<PathResult, QueryError> {
    let (start_inx, end_inx) = resolve_endpoints(graph, start, end)?;

    let n_cities = graph.city_count();
    let mut g_score: Vec<Option<Weight>> = vec![None; n_cities];
    let mut visited = vec![false; n_cities];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n_cities];

    g_score[start_inx.index()] = Some(0);
    let mut frontier = Frontier::new();
    frontier.push(start_inx, estimate(graph, start_inx, end_inx));

    while let Some(current) = frontier.pop_min() {
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;

        if current == end_inx {
            break;
        }

        let cur_g = match g_score[current.index()] {
            Some(cur_g) => cur_g,
            None => continue,
        };

        for eref in graph.routes_from(current) {
            let next = eref.target();
            let tentative_g =
                cur_g.saturating_add(RouteGraph::weight(eref.weight(), criterion));

            let improved = match g_score[next.index()] {
                Some(old_g) => tentative_g < old_g,
                None => true,
            };

            if improved {
                let f_score = tentative_g.saturating_add(estimate(graph, next, end_inx));
                trace!(
                    from = current.index(),
                    to = next.index(),
                    tentative_g,
                    f_score,
                    "Relaxed route"
                );
                g_score[next.index()] = Some(tentative_g);
                parent[next.index()] = Some(current);
                frontier.push(next, f_score);
            }
        }
    }

    if g_score[end_inx.index()].is_none() {
        return Err(no_path(start, end, Algorithm::AStar));
    }

    reconstruct_path(graph, &parent, start_inx, end_inx, Algorithm::AStar)
}
