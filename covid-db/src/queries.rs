//! Typed query methods over the source and derived tables.
//!
//! Snapshot and mask-use queries read `case_snapshot`, so they return empty
//! results until [`Database::derive_month_end_snapshot`] has run.

use crate::models::{CaseSnapshot, MaskUse, StateMaskUse, StateRowCount};
use crate::Database;
use log::info;
use rusqlite::{params, Row};

fn mask_use_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<MaskUse> {
    Ok(MaskUse {
        never: row.get(offset)?,
        rarely: row.get(offset + 1)?,
        sometimes: row.get(offset + 2)?,
        frequently: row.get(offset + 3)?,
        always: row.get(offset + 4)?,
    })
}

impl Database {
    /// All month-end snapshot rows, in snapshot order.
    pub fn query_case_snapshot(&self) -> anyhow::Result<Vec<CaseSnapshot>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, year, month, county, state, state_abbrev, fips, cases, deaths,
                    latitude, longitude, state_latitude, state_longitude
             FROM case_snapshot
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CaseSnapshot {
                    date: row.get(0)?,
                    year: row.get(1)?,
                    month: row.get(2)?,
                    county: row.get(3)?,
                    state: row.get(4)?,
                    state_abbrev: row.get(5)?,
                    fips: row.get(6)?,
                    cases: row.get(7)?,
                    deaths: row.get(8)?,
                    latitude: row.get(9)?,
                    longitude: row.get(10)?,
                    state_latitude: row.get(11)?,
                    state_longitude: row.get(12)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        info!("query: query_case_snapshot returned {} records", rows.len());
        Ok(rows)
    }

    /// Distinct months present in `year` among cases that matched a county
    /// and a state centroid (before the month-end restriction).
    pub fn query_case_months(&self, year: i32) -> anyhow::Result<Vec<u32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT c.month
             FROM cases c
             INNER JOIN counties k ON k.county = c.county AND k.fips = c.fips
             INNER JOIN states s ON s.name = c.state
             WHERE c.year = ?1
             ORDER BY c.month",
        )?;
        let months = stmt
            .query_map(params![year], |row| row.get(0))?
            .collect::<Result<Vec<u32>, _>>()?;
        Ok(months)
    }

    /// Distinct states in the snapshot, alphabetically.
    pub fn query_snapshot_states(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT state FROM case_snapshot ORDER BY state")?;
        let states = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(states)
    }

    /// Snapshot row count per state, alphabetically.
    pub fn query_snapshot_state_counts(&self) -> anyhow::Result<Vec<StateRowCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, COUNT(*) FROM case_snapshot GROUP BY state ORDER BY state",
        )?;
        let counts = stmt
            .query_map([], |row| {
                Ok(StateRowCount {
                    state: row.get(0)?,
                    rows: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(counts)
    }

    /// Mean mask-use fractions per state.
    ///
    /// Mask rows are joined on county FIPS to the distinct
    /// (county, state, fips) triples of the snapshot, then averaged per state.
    pub fn query_state_mask_use(&self) -> anyhow::Result<Vec<StateMaskUse>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "WITH county_lookup AS (
                 SELECT DISTINCT county, state, fips FROM case_snapshot
             )
             SELECT l.state, AVG(m.never), AVG(m.rarely), AVG(m.sometimes),
                    AVG(m.frequently), AVG(m.always)
             FROM mask_use m
             INNER JOIN county_lookup l ON m.countyfp = l.fips
             GROUP BY l.state
             ORDER BY l.state",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StateMaskUse {
                    state: row.get(0)?,
                    mask_use: mask_use_from_row(row, 1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        info!("query: query_state_mask_use returned {} states", rows.len());
        Ok(rows)
    }

    /// Mean mask-use fractions over every joined county row.
    ///
    /// `None` when no mask row matched a snapshot county.
    pub fn query_us_mask_average(&self) -> anyhow::Result<Option<MaskUse>> {
        let conn = self.conn.borrow();
        let average = conn.query_row(
            "WITH county_lookup AS (
                 SELECT DISTINCT county, state, fips FROM case_snapshot
             )
             SELECT COUNT(*), AVG(m.never), AVG(m.rarely), AVG(m.sometimes),
                    AVG(m.frequently), AVG(m.always)
             FROM mask_use m
             INNER JOIN county_lookup l ON m.countyfp = l.fips",
            [],
            |row| {
                let joined: i64 = row.get(0)?;
                if joined == 0 {
                    Ok(None)
                } else {
                    Ok(Some(mask_use_from_row(row, 1)?))
                }
            },
        )?;
        Ok(average)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const CASES: &str = "\
date,county,state,fips,cases,deaths
2020-02-28,Cook,Illinois,17031,2,0
2020-02-29,Cook,Illinois,17031,3,0
2020-02-29,DuPage,Illinois,17043,1,0
2020-03-30,Cook,Illinois,17031,5000,0
2020-03-31,Cook,Illinois,17031,5575,0
2020-03-31,DuPage,Illinois,17043,300,0
2020-03-31,Lake,Indiana,18089,100,0
2020-03-31,Nowhere,Illinois,99999,7,0
2020-03-31,New York City,New York,,43139,932
2020-03-31,Atlantis,Sunken State,17031,9,0
2020-05-15,Cook,Illinois,17031,80000,0
2021-01-31,Cook,Illinois,17031,350000,0
";

    const COUNTIES: &str = "\
State,County ,FIPS ,Latitude ,Longitude
IL,Cook,17031,41.84,-87.82
IL,DuPage,17043,41.85,-88.09
IN,Lake,18089,41.47,-87.37
";

    const MASKS: &str = "\
COUNTYFP,NEVER,RARELY,SOMETIMES,FREQUENTLY,ALWAYS
17031,0.02,0.02,0.04,0.12,0.80
17043,0.04,0.04,0.06,0.16,0.70
18089,0.10,0.10,0.10,0.20,0.50
06037,0.01,0.01,0.03,0.10,0.85
";

    fn seeded() -> Database {
        let db = Database::new().unwrap();
        db.load_cases(CASES).unwrap();
        db.load_counties(COUNTIES).unwrap();
        db.load_bundled_states().unwrap();
        db.load_mask_use(MASKS).unwrap();
        db.derive_month_end_snapshot(2020).unwrap();
        db
    }

    #[test]
    fn snapshot_keeps_only_joined_month_end_rows() {
        let db = seeded();
        let snapshot = db.query_case_snapshot().unwrap();
        let keys: Vec<(String, String)> = snapshot
            .iter()
            .map(|r| (r.date.clone(), r.county.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2020-02-29".to_string(), "Cook".to_string()),
                ("2020-02-29".to_string(), "DuPage".to_string()),
                ("2020-03-31".to_string(), "Cook".to_string()),
                ("2020-03-31".to_string(), "DuPage".to_string()),
                ("2020-03-31".to_string(), "Lake".to_string()),
            ]
        );
        assert!(snapshot.iter().all(|r| r.year == 2020));

        let cook_march = &snapshot[2];
        assert_eq!(cook_march.month, 3);
        assert_eq!(cook_march.cases, 5575);
        assert_eq!(cook_march.state_abbrev, "IL");
        assert!((cook_march.latitude - 41.84).abs() < 1e-9);
        assert!((cook_march.state_latitude - 40.633125).abs() < 1e-9);
    }

    #[test]
    fn case_months_come_from_joined_year() {
        let db = seeded();
        assert_eq!(db.query_case_months(2020).unwrap(), vec![2, 3, 5]);
        assert_eq!(db.query_case_months(2021).unwrap(), vec![1]);
    }

    #[test]
    fn snapshot_states_and_counts() {
        let db = seeded();
        assert_eq!(
            db.query_snapshot_states().unwrap(),
            vec!["Illinois".to_string(), "Indiana".to_string()]
        );
        let counts = db.query_snapshot_state_counts().unwrap();
        assert_eq!(counts[0].state, "Illinois");
        assert_eq!(counts[0].rows, 4);
        assert_eq!(counts[1].rows, 1);
    }

    #[test]
    fn state_mask_use_averages_distinct_counties() {
        let db = seeded();
        let states = db.query_state_mask_use().unwrap();
        assert_eq!(states.len(), 2);
        let illinois = &states[0];
        assert_eq!(illinois.state, "Illinois");
        // Cook and DuPage once each, despite two snapshot months
        assert!((illinois.mask_use.always - 0.75).abs() < 1e-9);
        assert!((illinois.mask_use.never - 0.03).abs() < 1e-9);
        assert!((states[1].mask_use.always - 0.5).abs() < 1e-9);
    }

    #[test]
    fn us_average_covers_joined_counties_only() {
        let db = seeded();
        let us = db.query_us_mask_average().unwrap().unwrap();
        // Cook, DuPage, Lake; Los Angeles has no snapshot row
        assert!((us.always - (0.80 + 0.70 + 0.50) / 3.0).abs() < 1e-9);
        assert!((us.never - (0.02 + 0.04 + 0.10) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_joins_propagate_silently() {
        let db = Database::new().unwrap();
        db.load_cases(CASES).unwrap();
        db.load_bundled_states().unwrap();
        assert_eq!(db.derive_month_end_snapshot(2020).unwrap(), 0);
        assert!(db.query_case_snapshot().unwrap().is_empty());
        assert!(db.query_state_mask_use().unwrap().is_empty());
        assert_eq!(db.query_us_mask_average().unwrap(), None);
        assert!(db.query_case_months(2020).unwrap().is_empty());
    }
}
