use serde::{Deserialize, Serialize};

use crate::parse::parse_records;

/// Embedded state centroid CSV: `state,latitude,longitude,name`.
pub static STATE_LAT_LON_CSV: &str = include_str!("../../fixtures/state_lat_lon.csv");

pub const STATE_COLUMNS: [&str; 4] = ["state", "latitude", "longitude", "name"];

/// Centroid of a US state or territory.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StateLocation {
    /// Two-letter postal abbreviation
    #[serde(rename = "state")]
    pub abbrev: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Full name, matching the `state` column of the case file
    pub name: String,
}

impl StateLocation {
    /// Parse a state centroid CSV.
    pub fn parse_state_csv(csv_data: &str) -> anyhow::Result<Vec<StateLocation>> {
        parse_records(csv_data, &STATE_COLUMNS, "state locations")
    }

    /// State centroids bundled with the crate.
    pub fn bundled() -> anyhow::Result<Vec<StateLocation>> {
        StateLocation::parse_state_csv(STATE_LAT_LON_CSV)
    }
}
