//! This module focuses on reading city and route data, either from a JSON
//! network document or the built-in sample, and using it to generate a
//! route graph.

pub mod network;
pub mod sample;
pub mod structs;
