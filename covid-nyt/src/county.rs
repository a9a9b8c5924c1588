use serde::{Deserialize, Serialize};

use crate::parse::{deserialize_fips, parse_records};

/// Columns the county coordinate file must carry (after trimming; upstream
/// headers have trailing spaces).
pub const COUNTY_COLUMNS: [&str; 4] = ["County", "FIPS", "Latitude", "Longitude"];

/// Centroid of a US county, from the county coordinate CSV.
///
/// The area columns in the same file are ignored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CountyLocation {
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "FIPS", deserialize_with = "deserialize_fips")]
    pub fips: Option<u32>,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl CountyLocation {
    /// Parse the county coordinate CSV.
    pub fn parse_county_csv(csv_data: &str) -> anyhow::Result<Vec<CountyLocation>> {
        parse_records(csv_data, &COUNTY_COLUMNS, "county locations")
    }
}

#[cfg(test)]
mod tests {
    use super::CountyLocation;

    #[test]
    fn test_parse_county_csv_with_padded_headers() {
        let csv = "\
State,County ,FIPS ,LandAreakm2 ,Latitude ,Longitude
IL,Cook,17031,2447.45,41.8401 ,-87.8168
IL,DuPage,17043,848.09,41.8520,-88.0857
";
        let counties = CountyLocation::parse_county_csv(csv).unwrap();
        assert_eq!(counties.len(), 2);
        assert_eq!(counties[0].county, "Cook");
        assert_eq!(counties[0].fips, Some(17031));
        assert!((counties[0].latitude - 41.8401).abs() < 1e-9);
        assert!((counties[1].longitude + 88.0857).abs() < 1e-9);
    }
}
