//! The graph store which owns every city and route. Cities are held as node
//! weights of a petgraph graph and routes as edge weights, with a hashed
//! index from city identifiers to node indexes. Routes are always stored as
//! directed edges; for undirected graphs each logical route is materialised
//! once in each direction.

use crate::common::config::{Criterion, GraphConfig};
use crate::common::error::GraphError;
use crate::common::graph_data::{CityData, RouteData};
use geo::{Distance, Haversine, Point};
use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Graph};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, warn};

/// Numeric type shared by every search criterion
pub type Weight = u64;

/// Earth radius used by the A* heuristic, in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius assumed by geo's Haversine implementation, in metres
const GEO_EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Travel times are weighted in hundredths of an hour, so that they can be
/// compared using the same integer type as distance and cost
pub const TIME_SCALE: f64 = 100.0;

/// Storage for the full travel network
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    graph: Graph<CityData, RouteData, Directed, u32>,
    ids: FxHashMap<String, NodeIndex>,
    config: GraphConfig,
    route_count: usize,
}

/// Serializable overview of a graph, used when listing the network
#[derive(Debug, Serialize, PartialEq)]
pub struct GraphSummary {
    pub directed: bool,
    pub city_count: usize,
    pub route_count: usize,
    pub cities: Vec<CityData>,
}

impl RouteGraph {
    /// Create an empty graph using the provided settings
    pub fn new(config: GraphConfig) -> RouteGraph {
        RouteGraph {
            graph: Graph::<CityData, RouteData, Directed, u32>::new(),
            ids: FxHashMap::<String, NodeIndex>::default(),
            config,
            route_count: 0,
        }
    }

    /// Add a city to the graph, returning its index. Identifiers must be
    /// unique, and the city limit (if any) must not have been reached
    pub fn add_city(
        &mut self,
        id: &str,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<NodeIndex, GraphError> {
        if self.ids.contains_key(id) {
            warn!(id, "Rejected duplicate city");
            return Err(GraphError::DuplicateKey(id.to_string()));
        }

        if let Some(limit) = self.config.max_cities {
            if self.graph.node_count() >= limit {
                warn!(id, limit, "Rejected city, graph is full");
                return Err(GraphError::CapacityExceeded(limit));
            }
        }

        let city = CityData {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        };

        let inx = self.graph.add_node(city);
        self.ids.insert(id.to_string(), inx);

        debug!(id, index = inx.index(), "Added city");

        Ok(inx)
    }

    /// Add a route between two existing cities. On undirected graphs an
    /// identical route is also added in the opposite direction
    pub fn add_route(
        &mut self,
        from: &str,
        to: &str,
        distance: u32,
        time: f64,
        cost: u32,
        mode: &str,
    ) -> Result<(), GraphError> {
        let src_inx = match self.find_index(from) {
            Some(inx) => inx,
            None => {
                warn!(from, to, "Rejected route from unknown city");
                return Err(GraphError::UnknownCity(from.to_string()));
            }
        };

        let dst_inx = match self.find_index(to) {
            Some(inx) => inx,
            None => {
                warn!(from, to, "Rejected route to unknown city");
                return Err(GraphError::UnknownCity(to.to_string()));
            }
        };

        if !time.is_finite() || time < 0.0 {
            warn!(from, to, time, "Rejected route with invalid time");
            return Err(GraphError::InvalidRoute {
                from: from.to_string(),
                to: to.to_string(),
                time,
            });
        }

        let route = RouteData {
            distance,
            time,
            cost,
            mode: mode.to_string(),
        };

        self.graph.add_edge(src_inx, dst_inx, route.clone());
        if !self.config.directed {
            self.graph.add_edge(dst_inx, src_inx, route);
        }
        self.route_count += 1;

        debug!(from, to, directed = self.config.directed, "Added route");

        Ok(())
    }

    /// Retrieve the index of a city based on its identifier
    pub fn find_index(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get(id).copied()
    }

    /// Retrieve the details of the city at the provided index
    pub fn city(&self, inx: NodeIndex) -> Option<&CityData> {
        self.graph.node_weight(inx)
    }

    /// Iterate over every city in the order they were added
    pub fn cities(&self) -> impl Iterator<Item = (NodeIndex, &CityData)> {
        self.graph
            .node_indices()
            .map(move |inx| (inx, &self.graph[inx]))
    }

    /// Iterate over the outgoing routes of a city. The most recently added
    /// route is returned first
    pub fn routes_from(
        &self,
        inx: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, RouteData>> {
        self.graph.edges(inx)
    }

    /// Retrieve the first route in the adjacency list of `from` which leads
    /// to `to`
    pub fn find_route(
        &self,
        from: NodeIndex,
        to: NodeIndex,
    ) -> Option<&RouteData> {
        self.routes_from(from)
            .find(|eref| eref.target() == to)
            .map(|eref| eref.weight())
    }

    /// Check whether a route exists between two cities, by identifier
    pub fn has_route(&self, from: &str, to: &str) -> bool {
        match (self.find_index(from), self.find_index(to)) {
            (Some(src), Some(dst)) => self.find_route(src, dst).is_some(),
            _ => false,
        }
    }

    /// Determine the weight of a route for the provided criterion
    pub fn weight(route: &RouteData, criterion: Criterion) -> Weight {
        match criterion {
            Criterion::Distance => route.distance as Weight,
            Criterion::Time => (route.time * TIME_SCALE).round() as Weight,
            Criterion::Cost => route.cost as Weight,
        }
    }

    /// Great-circle distance between two cities in km. This is a lower bound
    /// on the distance of any route between them, but makes no promises
    /// about time or cost
    pub fn heuristic(&self, from: NodeIndex, to: NodeIndex) -> f64 {
        let (src, dst) = match (self.city(from), self.city(to)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return 0.0,
        };

        let src_point = Point::new(src.lon, src.lat);
        let dst_point = Point::new(dst.lon, dst.lat);

        Haversine::distance(src_point, dst_point) / GEO_EARTH_RADIUS_M
            * EARTH_RADIUS_KM
    }

    pub fn city_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of logical routes, i.e. successful calls to add_route
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Number of stored (directed) route records
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Generate a serializable overview of the graph
    pub fn summarise(&self) -> GraphSummary {
        GraphSummary {
            directed: self.is_directed(),
            city_count: self.city_count(),
            route_count: self.route_count(),
            cities: self.cities().map(|(_, city)| city.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    /// Generate a small undirected graph containing Delhi, Jaipur and
    /// Ahmedabad, with no direct Delhi - Ahmedabad route
    fn get_test_graph(directed: bool) -> RouteGraph {
        let mut graph = RouteGraph::new(GraphConfig {
            directed,
            max_cities: None,
        });

        graph.add_city("del", "Delhi", 28.6139, 77.2090).unwrap();
        graph.add_city("jaipur", "Jaipur", 26.9124, 75.7873).unwrap();
        graph.add_city("ahm", "Ahmedabad", 23.0225, 72.5714).unwrap();

        graph
            .add_route("del", "jaipur", 280, 3.5, 450, "Train")
            .unwrap();
        graph
            .add_route("jaipur", "ahm", 640, 9.0, 1200, "Train")
            .unwrap();

        graph
    }

    /// Cities are assigned sequential indexes and can be looked up by id
    #[test]
    fn test_add_city() {
        let mut graph = RouteGraph::default();

        let first = graph.add_city("del", "Delhi", 28.6, 77.2);
        let second = graph.add_city("mum", "Mumbai", 19.0, 72.8);

        assert_eq!(first, Ok(NodeIndex::new(0)));
        assert_eq!(second, Ok(NodeIndex::new(1)));
        assert_eq!(graph.find_index("mum"), Some(NodeIndex::new(1)));
        assert_eq!(graph.find_index("goa"), None);
        assert_eq!(graph.city_count(), 2);
    }

    /// Adding the same identifier twice is rejected, and the original city
    /// is left untouched
    #[test]
    fn test_add_city_duplicate() {
        let mut graph = RouteGraph::default();
        graph.add_city("del", "Delhi", 28.6, 77.2).unwrap();

        let result = graph.add_city("del", "New Delhi", 0.0, 0.0);

        assert_eq!(result, Err(GraphError::DuplicateKey("del".to_string())));
        assert_eq!(graph.city_count(), 1);
        assert_eq!(graph.city(NodeIndex::new(0)).unwrap().name, "Delhi");
    }

    /// Once the city limit is reached, further cities are rejected
    #[test]
    fn test_add_city_capacity() {
        let mut graph = RouteGraph::new(GraphConfig {
            directed: false,
            max_cities: Some(1),
        });
        graph.add_city("del", "Delhi", 28.6, 77.2).unwrap();

        let result = graph.add_city("mum", "Mumbai", 19.0, 72.8);

        assert_eq!(result, Err(GraphError::CapacityExceeded(1)));
    }

    /// Routes between unknown cities are rejected without modifying the graph
    #[test]
    fn test_add_route_unknown() {
        let mut graph = get_test_graph(false);

        let from_result = graph.add_route("xyz", "del", 1, 1.0, 1, "Bus");
        let to_result = graph.add_route("del", "xyz", 1, 1.0, 1, "Bus");

        assert_eq!(from_result, Err(GraphError::UnknownCity("xyz".to_string())));
        assert_eq!(to_result, Err(GraphError::UnknownCity("xyz".to_string())));
        assert_eq!(graph.route_count(), 2);
        assert_eq!(graph.edge_count(), 4);
    }

    /// Negative travel times are rejected
    #[test]
    fn test_add_route_invalid_time() {
        let mut graph = get_test_graph(false);

        let result = graph.add_route("del", "ahm", 900, -1.0, 1500, "Bus");

        match result {
            Err(GraphError::InvalidRoute { .. }) => (),
            _ => panic!("Should have rejected the route!"),
        }
        assert!(!graph.has_route("del", "ahm"));
    }

    /// Undirected graphs get an identical reverse route for every route
    #[test]
    fn test_add_route_undirected() {
        let graph = get_test_graph(false);
        let del = graph.find_index("del").unwrap();
        let jaipur = graph.find_index("jaipur").unwrap();

        let forward = graph.find_route(del, jaipur);
        let reverse = graph.find_route(jaipur, del);

        assert!(forward.is_some());
        assert_eq!(forward, reverse);
        assert_eq!(graph.route_count(), 2);
        assert_eq!(graph.edge_count(), 4);
    }

    /// Directed graphs only store the route which was requested
    #[test]
    fn test_add_route_directed() {
        let graph = get_test_graph(true);

        assert!(graph.has_route("del", "jaipur"));
        assert!(!graph.has_route("jaipur", "del"));
        assert_eq!(graph.edge_count(), 2);
    }

    /// The most recently added route is listed first
    #[test]
    fn test_routes_from_order() {
        let graph = get_test_graph(false);
        let jaipur = graph.find_index("jaipur").unwrap();

        let targets: Vec<String> = graph
            .routes_from(jaipur)
            .map(|eref| graph.city(eref.target()).unwrap().id.clone())
            .collect();

        assert_eq!(targets, vec!["ahm".to_string(), "del".to_string()]);
    }

    /// Each criterion selects the relevant attribute, with time scaled so it
    /// can be held as an integer
    #[test]
    fn test_weight() {
        let route = RouteData {
            distance: 280,
            time: 3.5,
            cost: 450,
            mode: "Train".to_string(),
        };

        assert_eq!(RouteGraph::weight(&route, Criterion::Distance), 280);
        assert_eq!(RouteGraph::weight(&route, Criterion::Time), 350);
        assert_eq!(RouteGraph::weight(&route, Criterion::Cost), 450);
    }

    /// Scaled times are rounded rather than truncated, so that floating
    /// point error does not lose a unit
    #[test]
    fn test_weight_time_rounding() {
        let route = RouteData {
            distance: 1,
            time: 2.3,
            cost: 1,
            mode: "Bus".to_string(),
        };

        assert_eq!(RouteGraph::weight(&route, Criterion::Time), 230);
    }

    /// Delhi to Jaipur is roughly 235km as the crow flies
    #[test]
    fn test_heuristic() {
        let graph = get_test_graph(false);
        let del = graph.find_index("del").unwrap();
        let jaipur = graph.find_index("jaipur").unwrap();

        let result = graph.heuristic(del, jaipur);

        assert_relative_eq!(result, 235.0, epsilon = 5.0);
        assert_relative_eq!(result, graph.heuristic(jaipur, del));
        assert_relative_eq!(graph.heuristic(del, del), 0.0);
    }

    /// The heuristic never exceeds the route distance in the sample data
    #[test]
    fn test_heuristic_below_route_distance() {
        let graph = get_test_graph(false);
        let jaipur = graph.find_index("jaipur").unwrap();
        let ahm = graph.find_index("ahm").unwrap();

        assert!(graph.heuristic(jaipur, ahm) < 640.0);
    }

    /// Check that the graph summary reflects the stored cities
    #[test]
    fn test_summarise() {
        let graph = get_test_graph(false);

        let result = graph.summarise();

        assert!(!result.directed);
        assert_eq!(result.city_count, 3);
        assert_eq!(result.route_count, 2);
        let ids: Vec<&str> =
            result.cities.iter().map(|city| city.id.as_str()).collect();
        assert_eq!(ids, vec!["del", "jaipur", "ahm"]);
    }
}
