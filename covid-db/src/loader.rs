//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses CSV text with the matching `covid-nyt` record type and
//! inserts the rows inside a single transaction. Loaders return the number
//! of rows inserted.
//!
//! # CSV Formats
//!
//! - **Cases**: `date,county,state,fips,cases,deaths`
//! - **Counties**: `County ,FIPS ,Latitude ,Longitude` (plus ignored area columns)
//! - **States**: `state,latitude,longitude,name`
//! - **Mask use**: `COUNTYFP,NEVER,RARELY,SOMETIMES,FREQUENTLY,ALWAYS`

use crate::Database;
use covid_nyt::case::CaseRecord;
use covid_nyt::county::CountyLocation;
use covid_nyt::mask_use::MaskUseRecord;
use covid_nyt::source::RawDatasets;
use covid_nyt::state::StateLocation;
use covid_utils::dates::format_date;
use log::info;
use rusqlite::params;

impl Database {
    /// Load daily county case counts.
    ///
    /// Year and month are split out of the date so the pipeline can filter
    /// on them without date functions.
    pub fn load_cases(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = CaseRecord::parse_case_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO cases (date, year, month, county, state, fips, cases, deaths)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for r in &records {
                stmt.execute(params![
                    format_date(&r.date),
                    r.year(),
                    r.month(),
                    r.county,
                    r.state,
                    r.fips,
                    r.cases,
                    r.deaths,
                ])?;
            }
        }
        tx.commit()?;
        info!("loader: Loaded {} case rows", records.len());
        Ok(records.len())
    }

    /// Load county centroids.
    pub fn load_counties(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = CountyLocation::parse_county_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO counties (county, fips, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for r in &records {
                stmt.execute(params![r.county, r.fips, r.latitude, r.longitude])?;
            }
        }
        tx.commit()?;
        info!("loader: Loaded {} counties", records.len());
        Ok(records.len())
    }

    /// Load state centroids from CSV text.
    pub fn load_states(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = StateLocation::parse_state_csv(csv_data)?;
        self.insert_states(&records)
    }

    /// Load the state centroids bundled with `covid-nyt`.
    pub fn load_bundled_states(&self) -> anyhow::Result<usize> {
        let records = StateLocation::bundled()?;
        self.insert_states(&records)
    }

    fn insert_states(&self, records: &[StateLocation]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO states (abbrev, name, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for r in records {
                stmt.execute(params![r.abbrev, r.name, r.latitude, r.longitude])?;
            }
        }
        tx.commit()?;
        info!("loader: Loaded {} states", records.len());
        Ok(records.len())
    }

    /// Load county mask-use survey fractions.
    pub fn load_mask_use(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = MaskUseRecord::parse_mask_use_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO mask_use (countyfp, never, rarely, sometimes, frequently, always)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in &records {
                stmt.execute(params![
                    r.countyfp,
                    r.never,
                    r.rarely,
                    r.sometimes,
                    r.frequently,
                    r.always,
                ])?;
            }
        }
        tx.commit()?;
        info!("loader: Loaded {} mask use rows", records.len());
        Ok(records.len())
    }

    /// Load the three remote datasets plus the bundled state centroids.
    pub fn load_datasets(&self, raw: &RawDatasets) -> anyhow::Result<()> {
        self.load_cases(&raw.cases)?;
        self.load_counties(&raw.county_locations)?;
        self.load_mask_use(&raw.mask_use)?;
        self.load_bundled_states()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use covid_nyt::source::RawDatasets;

    #[test]
    fn load_cases_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
date,county,state,fips,cases,deaths
2020-03-31,Cook,Illinois,17031,3727,72
2020-03-31,New York City,New York,,43139,932
";
        assert_eq!(db.load_cases(csv).unwrap(), 2);

        let conn = db.conn.borrow();
        let (year, month, fips): (i32, u32, Option<u32>) = conn
            .query_row(
                "SELECT year, month, fips FROM cases WHERE county = 'Cook'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!((year, month, fips), (2020, 3, Some(17031)));

        let nyc_fips: Option<u32> = conn
            .query_row(
                "SELECT fips FROM cases WHERE county = 'New York City'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nyc_fips, None);
    }

    #[test]
    fn load_counties_and_mask_use() {
        let db = Database::new().unwrap();
        db.load_counties("County ,FIPS ,Latitude ,Longitude\nCook,17031,41.84,-87.82\n")
            .unwrap();
        db.load_mask_use(
            "COUNTYFP,NEVER,RARELY,SOMETIMES,FREQUENTLY,ALWAYS\n17031,0.02,0.02,0.04,0.12,0.8\n",
        )
        .unwrap();
        assert_eq!(db.count_rows("counties").unwrap(), 1);
        assert_eq!(db.count_rows("mask_use").unwrap(), 1);
    }

    #[test]
    fn load_states_from_csv() {
        let db = Database::new().unwrap();
        let csv = "state,latitude,longitude,name\nIL,40.63,-89.39,Illinois\n";
        assert_eq!(db.load_states(csv).unwrap(), 1);
        let conn = db.conn.borrow();
        let abbrev: String = conn
            .query_row("SELECT abbrev FROM states WHERE name = 'Illinois'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(abbrev, "IL");
    }

    #[test]
    fn load_datasets_fails_on_schema_drift() {
        let db = Database::new().unwrap();
        let raw = RawDatasets {
            cases: "day,county,state,fips,cases\n".to_string(),
            county_locations: String::new(),
            mask_use: String::new(),
        };
        assert!(db.load_datasets(&raw).is_err());
    }
}
