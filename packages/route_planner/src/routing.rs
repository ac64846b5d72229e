//! Path finding over a route graph. Each engine answers a single query
//! between two named cities, returning the chosen path alongside its
//! accumulated metrics.

pub mod all_paths;
pub mod astar;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod dijkstra;
pub mod frontier;
pub mod structs;
