//! Enumeration of every simple path between two cities, used to present
//! alternatives alongside the single path chosen by one of the engines.

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::common::error::QueryError;
use crate::common::graph::RouteGraph;
use crate::routing::common::{measure_path, resolve_endpoints};
use crate::routing::structs::PathResult;

/// Cities reachable in one step from `inx`, in adjacency order. Parallel
/// routes to the same city are only listed once
fn distinct_targets(graph: &RouteGraph, inx: NodeIndex) -> std::vec::IntoIter<NodeIndex> {
    let mut seen = FxHashSet::default();
    graph
        .routes_from(inx)
        .map(|eref| eref.target())
        .filter(|target| seen.insert(*target))
        .collect::<Vec<NodeIndex>>()
        .into_iter()
}

/// Collect up to `max_paths` paths from `start` to `end` which never visit a
/// city twice. Paths are produced in depth-first order. Unlike the search
/// engines, cities are released again when the search backtracks past them,
/// so the same city can appear on several of the returned paths. Results
/// carry no engine label
#[tracing::instrument(skip(graph))]
pub fn find_all_paths(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    max_paths: usize,
) -> Result<Vec<PathResult>, QueryError> {
    let (start_inx, end_inx) = resolve_endpoints(graph, start, end)?;

    if max_paths == 0 {
        return Ok(Vec::new());
    }

    let mut found: Vec<Vec<NodeIndex>> = Vec::new();
    if start_inx == end_inx {
        found.push(vec![start_inx]);
    } else {
        let mut on_path = vec![false; graph.city_count()];
        let mut path = vec![start_inx];
        on_path[start_inx.index()] = true;

        let mut stack = vec![distinct_targets(graph, start_inx)];
        while found.len() < max_paths {
            let Some(targets) = stack.last_mut() else {
                break;
            };

            let Some(next) = targets.next() else {
                stack.pop();
                if let Some(left) = path.pop() {
                    on_path[left.index()] = false;
                }
                continue;
            };

            if on_path[next.index()] {
                continue;
            }

            if next == end_inx {
                let mut complete = path.clone();
                complete.push(next);
                found.push(complete);
            } else {
                on_path[next.index()] = true;
                path.push(next);
                stack.push(distinct_targets(graph, next));
            }
        }
    }

    debug!(paths = found.len(), "Path enumeration complete");

    found
        .into_iter()
        .map(|path| measure_path(graph, path, None))
        .collect()
}
