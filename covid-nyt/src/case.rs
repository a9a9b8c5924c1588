use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::parse::{deserialize_fips, parse_records};

/// Columns the county case file must carry.
pub const CASE_COLUMNS: [&str; 5] = ["date", "county", "state", "fips", "cases"];

/// One cumulative case count for a county on a given day, as published in
/// the NYT `us-counties.csv` file.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub date: NaiveDate,
    pub county: String,
    pub state: String,
    /// Empty for aggregated pseudo-counties such as "New York City" or "Unknown".
    #[serde(deserialize_with = "deserialize_fips")]
    pub fips: Option<u32>,
    /// Cumulative confirmed cases
    pub cases: i64,
    #[serde(default)]
    pub deaths: Option<i64>,
}

impl CaseRecord {
    /// Parse the county case CSV.
    ///
    /// Expected header: `date,county,state,fips,cases,deaths`
    pub fn parse_case_csv(csv_data: &str) -> anyhow::Result<Vec<CaseRecord>> {
        parse_records(csv_data, &CASE_COLUMNS, "cases")
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

#[cfg(test)]
mod tests {
    use super::CaseRecord;
    use chrono::NaiveDate;

    const CASES: &str = "\
date,county,state,fips,cases,deaths
2020-01-21,Snohomish,Washington,53061,1,0
2020-03-31,Cook,Illinois,17031,3727,
2020-03-31,New York City,New York,,43139,932
not-a-date,Cook,Illinois,17031,1,0
2021-01-31,Cook,Illinois,17031.0,350000,6000
";

    #[test]
    fn test_parse_case_csv() {
        let records = CaseRecord::parse_case_csv(CASES).unwrap();
        assert_eq!(records.len(), 4, "row with a bad date is skipped");

        let cook = &records[1];
        assert_eq!(cook.county, "Cook");
        assert_eq!(cook.fips, Some(17031));
        assert_eq!(cook.cases, 3727);
        assert_eq!(cook.deaths, None);
        assert_eq!(cook.date, NaiveDate::from_ymd_opt(2020, 3, 31).unwrap());
        assert_eq!(cook.month(), 3);

        assert_eq!(records[2].fips, None);
        assert_eq!(records[3].fips, Some(17031));
        assert_eq!(records[3].year(), 2021);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let drifted = "date,county,state,geoid,cases\n2020-01-21,Snohomish,Washington,53061,1\n";
        let err = CaseRecord::parse_case_csv(drifted).unwrap_err();
        assert!(err.to_string().contains("fips"));
    }
}
