//! Defines the struct which contains high level information about a path
//! (i.e. total distance, total time, total cost)

use crate::common::graph_data::RouteData;
use serde::Serialize;

/// Container for the overall metrics of a path. Totals are built up one
/// route at a time as the path is measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathMetrics {
    /// Total distance in km
    pub distance: u64,
    /// Total travel time in hours
    pub time: f64,
    /// Total fare in whole currency units
    pub cost: u64,
}

impl PathMetrics {
    pub fn new() -> PathMetrics {
        PathMetrics {
            distance: 0,
            time: 0.0,
            cost: 0,
        }
    }

    /// Update the metrics to reflect their state after traversing the
    /// provided route
    pub fn take_step(&mut self, route: &RouteData) {
        self.distance += route.distance as u64;
        self.time += route.time;
        self.cost += route.cost as u64;
    }
}
