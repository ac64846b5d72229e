use serde::Deserialize;

use crate::common::graph_data::{CityData, RouteData};

/// Container for a single city as it appears in a network document
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CityRow {
    pub id: String,
    name: String,
    lat: f64,
    lon: f64,
}

impl CityRow {
    pub fn new(id: &str, name: &str, lat: f64, lon: f64) -> CityRow {
        CityRow {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        }
    }

    /// Unpack the raw city data into a format which can be loaded into the
    /// graph
    pub fn prepare(self) -> CityData {
        CityData {
            id: self.id,
            name: self.name,
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Container for a single route as it appears in a network document
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RouteRow {
    pub src: String,
    pub dst: String,
    distance: u32,
    time: f64,
    cost: u32,
    mode: String,
}

impl RouteRow {
    pub fn new(
        src: &str,
        dst: &str,
        distance: u32,
        time: f64,
        cost: u32,
        mode: &str,
    ) -> RouteRow {
        RouteRow {
            src: src.to_string(),
            dst: dst.to_string(),
            distance,
            time,
            cost,
            mode: mode.to_string(),
        }
    }

    /// Unpack the raw route data into a format which can be loaded into the
    /// graph, alongside the identifiers of the cities it connects
    pub fn prepare(self) -> (String, String, RouteData) {
        let data = RouteData {
            distance: self.distance,
            time: self.time,
            cost: self.cost,
            mode: self.mode,
        };

        (self.src, self.dst, data)
    }
}

/// Container for a full network document. Routes may only refer to cities
/// which are listed in the same document
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkRows {
    pub cities: Vec<CityRow>,
    pub routes: Vec<RouteRow>,
}
