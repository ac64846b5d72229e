use serde::Serialize;

/// Sets the data which will be stored as node weights in the petgraph graph.
/// Cities are immutable once they have been added to the graph
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct CityData {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Container for route metadata which will be stored as edge weights in the
/// graph. The destination is implied by the edge itself, so only the travel
/// details are held here
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct RouteData {
    /// Distance in km
    pub distance: u32,
    /// Travel time in hours
    pub time: f64,
    /// Fare in whole currency units
    pub cost: u32,
    /// Transport mode, e.g. Train, Bus, Flight
    pub mode: String,
}
