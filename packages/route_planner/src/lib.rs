//! Route planning over a network of cities. Cities are connected by routes
//! which carry a distance, a travel time and a cost, and paths between them
//! can be found with Dijkstra's algorithm, A*, breadth-first search or
//! depth-first search.

pub mod common;
pub mod loading;
pub mod routing;
