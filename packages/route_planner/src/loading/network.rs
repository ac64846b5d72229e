use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::config::GraphConfig;
use crate::common::error::{GraphError, LoadError};
use crate::common::graph::RouteGraph;
use crate::loading::structs::{CityRow, NetworkRows, RouteRow};

/// Based on the city and route rows provided, generate a graph which can be
/// used for path finding. Every city is added before any route, and the
/// first invalid row aborts the load
pub fn create_graph(
    cities: Vec<CityRow>,
    routes: Vec<RouteRow>,
    config: GraphConfig,
) -> Result<RouteGraph, GraphError> {
    let mut graph = RouteGraph::new(config);

    for city in cities {
        let data = city.prepare();
        graph.add_city(&data.id, &data.name, data.lat, data.lon)?;
    }

    for route in routes {
        let (src, dst, data) = route.prepare();
        graph.add_route(
            &src,
            &dst,
            data.distance,
            data.time,
            data.cost,
            &data.mode,
        )?;
    }

    info!(
        cities = graph.city_count(),
        routes = graph.route_count(),
        directed = graph.is_directed(),
        "Graph created"
    );

    Ok(graph)
}

/// Parse a JSON network document and build a graph from it
pub fn parse_network(
    document: &str,
    config: GraphConfig,
) -> Result<RouteGraph, LoadError> {
    let rows: NetworkRows = serde_json::from_str(document)?;
    Ok(create_graph(rows.cities, rows.routes, config)?)
}

/// Read a JSON network document from disk and build a graph from it
pub fn load_network_file(
    path: &Path,
    config: GraphConfig,
) -> Result<RouteGraph, LoadError> {
    info!(path = %path.display(), "Loading network");
    let document = fs::read_to_string(path)?;
    parse_network(&document, config)
}
