pub mod config;
pub mod error;
pub mod graph;
pub mod graph_data;
