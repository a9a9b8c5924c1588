use serde::{Deserialize, Serialize};

use crate::parse::{deserialize_fips, parse_records};

pub const MASK_USE_COLUMNS: [&str; 6] =
    ["COUNTYFP", "NEVER", "RARELY", "SOMETIMES", "FREQUENTLY", "ALWAYS"];

/// County-level answer shares to "How often do you wear a mask in public
/// when you expect to be within six feet of another person?"
///
/// The five fractions are stored as sourced (0.0 - 1.0).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MaskUseRecord {
    #[serde(rename = "COUNTYFP", deserialize_with = "deserialize_fips")]
    pub countyfp: Option<u32>,
    #[serde(rename = "NEVER")]
    pub never: f64,
    #[serde(rename = "RARELY")]
    pub rarely: f64,
    #[serde(rename = "SOMETIMES")]
    pub sometimes: f64,
    #[serde(rename = "FREQUENTLY")]
    pub frequently: f64,
    #[serde(rename = "ALWAYS")]
    pub always: f64,
}

impl MaskUseRecord {
    /// Parse the county mask-use CSV.
    pub fn parse_mask_use_csv(csv_data: &str) -> anyhow::Result<Vec<MaskUseRecord>> {
        parse_records(csv_data, &MASK_USE_COLUMNS, "mask use")
    }
}

#[cfg(test)]
mod tests {
    use super::MaskUseRecord;

    #[test]
    fn test_parse_mask_use_csv() {
        let csv = "\
COUNTYFP,NEVER,RARELY,SOMETIMES,FREQUENTLY,ALWAYS
01001,0.053,0.074,0.134,0.295,0.444
17031,0.02,0.019,0.042,0.118,0.8
";
        let rows = MaskUseRecord::parse_mask_use_csv(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].countyfp, Some(1001));
        assert_eq!(rows[1].countyfp, Some(17031));
        assert!((rows[1].always - 0.8).abs() < 1e-12);
    }
}
