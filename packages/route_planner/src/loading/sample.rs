//! Built-in sample network of twenty Indian cities, used when no network
//! document is provided. Every route distance is at least the great-circle
//! distance between its endpoints.

use crate::common::config::GraphConfig;
use crate::common::error::GraphError;
use crate::common::graph::RouteGraph;
use crate::loading::network::create_graph;
use crate::loading::structs::{CityRow, RouteRow};

/// Cities in the sample network, with coordinates in degrees
pub fn sample_cities() -> Vec<CityRow> {
    vec![
        CityRow::new("del", "Delhi", 28.6139, 77.2090),
        CityRow::new("mum", "Mumbai", 19.0760, 72.8777),
        CityRow::new("blr", "Bangalore", 12.9716, 77.5946),
        CityRow::new("hyd", "Hyderabad", 17.3850, 78.4867),
        CityRow::new("chen", "Chennai", 13.0827, 80.2707),
        CityRow::new("kol", "Kolkata", 22.5726, 88.3639),
        CityRow::new("ahm", "Ahmedabad", 23.0225, 72.5714),
        CityRow::new("pune", "Pune", 18.5204, 73.8567),
        CityRow::new("jaipur", "Jaipur", 26.9124, 75.7873),
        CityRow::new("luck", "Lucknow", 26.8467, 80.9462),
        CityRow::new("kochi", "Kochi", 9.9312, 76.2673),
        CityRow::new("goa", "Goa", 15.2993, 74.1240),
        CityRow::new("chand", "Chandigarh", 30.7333, 76.7794),
        CityRow::new("indore", "Indore", 22.7196, 75.8577),
        CityRow::new("bhopal", "Bhopal", 23.2599, 77.4126),
        CityRow::new("nagpur", "Nagpur", 21.1458, 79.0882),
        CityRow::new("vizag", "Visakhapatnam", 17.6868, 83.2185),
        CityRow::new("surat", "Surat", 21.1702, 72.8311),
        CityRow::new("varanasi", "Varanasi", 25.3176, 82.9739),
        CityRow::new("amritsar", "Amritsar", 31.6340, 74.8723),
    ]
}

/// Routes in the sample network: distance (km), time (hours), cost, mode
pub fn sample_routes() -> Vec<RouteRow> {
    vec![
        // Delhi
        RouteRow::new("del", "jaipur", 280, 3.5, 450, "Train"),
        RouteRow::new("del", "chand", 250, 3.0, 400, "Train"),
        RouteRow::new("del", "luck", 550, 6.5, 800, "Train"),
        RouteRow::new("del", "mum", 1400, 2.5, 3500, "Flight"),
        RouteRow::new("del", "amritsar", 450, 5.5, 650, "Train"),
        // Mumbai
        RouteRow::new("mum", "pune", 150, 2.5, 300, "Train"),
        RouteRow::new("mum", "goa", 450, 8.0, 900, "Bus"),
        RouteRow::new("mum", "ahm", 530, 7.0, 950, "Train"),
        RouteRow::new("mum", "surat", 265, 4.0, 450, "Train"),
        RouteRow::new("mum", "indore", 590, 8.5, 1100, "Bus"),
        // Bangalore
        RouteRow::new("blr", "chen", 350, 5.0, 650, "Train"),
        RouteRow::new("blr", "hyd", 575, 7.5, 1050, "Bus"),
        RouteRow::new("blr", "kochi", 540, 8.0, 950, "Bus"),
        RouteRow::new("blr", "goa", 560, 9.0, 1000, "Bus"),
        RouteRow::new("blr", "pune", 840, 2.0, 2800, "Flight"),
        // Chennai
        RouteRow::new("chen", "hyd", 630, 8.5, 1150, "Train"),
        RouteRow::new("chen", "kochi", 680, 10.0, 1250, "Train"),
        RouteRow::new("chen", "vizag", 795, 11.0, 1400, "Train"),
        // Kolkata
        RouteRow::new("kol", "varanasi", 680, 10.0, 1250, "Train"),
        RouteRow::new("kol", "luck", 980, 14.0, 1800, "Train"),
        RouteRow::new("kol", "hyd", 1500, 2.5, 4000, "Flight"),
        // Raised from 680, which is shorter than the great-circle distance
        RouteRow::new("kol", "vizag", 880, 10.0, 1250, "Train"),
        // Hyderabad
        RouteRow::new("hyd", "nagpur", 500, 7.5, 900, "Train"),
        RouteRow::new("hyd", "vizag", 620, 9.0, 1150, "Train"),
        RouteRow::new("hyd", "bhopal", 770, 11.0, 1400, "Bus"),
        // Ahmedabad
        RouteRow::new("ahm", "jaipur", 640, 9.0, 1200, "Train"),
        RouteRow::new("ahm", "indore", 430, 6.5, 800, "Bus"),
        RouteRow::new("ahm", "surat", 265, 4.0, 450, "Train"),
        // Jaipur
        RouteRow::new("jaipur", "indore", 490, 7.0, 900, "Bus"),
        RouteRow::new("jaipur", "bhopal", 590, 8.5, 1100, "Bus"),
        // Pune
        RouteRow::new("pune", "goa", 450, 8.0, 850, "Bus"),
        RouteRow::new("pune", "indore", 540, 8.0, 1000, "Bus"),
        // Goa
        // Raised from 590, which is shorter than the great-circle distance
        RouteRow::new("goa", "kochi", 700, 10.0, 1100, "Bus"),
        // Chandigarh
        RouteRow::new("chand", "amritsar", 230, 3.5, 400, "Train"),
        // Lucknow
        RouteRow::new("luck", "varanasi", 320, 5.0, 550, "Train"),
        RouteRow::new("luck", "bhopal", 700, 10.0, 1300, "Train"),
        // Nagpur
        RouteRow::new("nagpur", "indore", 390, 6.0, 700, "Train"),
        RouteRow::new("nagpur", "bhopal", 350, 5.5, 650, "Train"),
    ]
}

/// Build the sample network using the provided settings
pub fn sample_graph(config: GraphConfig) -> Result<RouteGraph, GraphError> {
    create_graph(sample_cities(), sample_routes(), config)
}
