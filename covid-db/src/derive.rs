//! Month-end snapshot derivation.

use crate::Database;
use chrono::Datelike;
use covid_utils::dates::{format_date, month_end_dates};
use log::info;
use rusqlite::params;

impl Database {
    /// Build the `case_snapshot` table for `year`.
    ///
    /// Cases are inner-joined to county centroids on (county, fips) and to
    /// state centroids on the full state name, restricted to `year`, and
    /// inner-joined to the twelve month-end dates of that year. Rows without
    /// a match on any side are dropped. Rows are ordered by date, then by
    /// source order. Any previous snapshot is replaced.
    ///
    /// Returns the number of snapshot rows.
    pub fn derive_month_end_snapshot(&self, year: i32) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        tx.execute("DELETE FROM month_end_dates", [])?;
        tx.execute("DELETE FROM case_snapshot", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO month_end_dates (date, month) VALUES (?1, ?2)")?;
            for date in month_end_dates(year) {
                stmt.execute(params![format_date(&date), date.month()])?;
            }
        }
        let rows = tx.execute(
            "INSERT INTO case_snapshot
                (date, year, month, county, state, state_abbrev, fips, cases, deaths,
                 latitude, longitude, state_latitude, state_longitude)
             SELECT c.date, c.year, c.month, c.county, c.state, s.abbrev, c.fips, c.cases, c.deaths,
                    k.latitude, k.longitude, s.latitude, s.longitude
             FROM month_end_dates d
             INNER JOIN cases c ON c.date = d.date
             INNER JOIN counties k ON k.county = c.county AND k.fips = c.fips
             INNER JOIN states s ON s.name = c.state
             WHERE c.year = ?1
             ORDER BY d.date, c.rowid, k.rowid, s.rowid",
            params![year],
        )?;
        tx.commit()?;
        info!("derive: month-end snapshot for {} has {} rows", year, rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn month_end_dates_table_has_twelve_rows() {
        let db = Database::new().unwrap();
        db.derive_month_end_snapshot(2020).unwrap();
        assert_eq!(db.count_rows("month_end_dates").unwrap(), 12);

        let conn = db.conn.borrow();
        let feb: String = conn
            .query_row("SELECT date FROM month_end_dates WHERE month = 2", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(feb, "2020-02-29");
    }

    #[test]
    fn derive_is_repeatable() {
        let db = Database::new().unwrap();
        db.load_cases("date,county,state,fips,cases,deaths\n2020-01-31,Cook,Illinois,17031,1,0\n")
            .unwrap();
        db.load_counties("County,FIPS,Latitude,Longitude\nCook,17031,41.84,-87.82\n")
            .unwrap();
        db.load_bundled_states().unwrap();
        assert_eq!(db.derive_month_end_snapshot(2020).unwrap(), 1);
        assert_eq!(db.derive_month_end_snapshot(2020).unwrap(), 1);
        assert_eq!(db.count_rows("case_snapshot").unwrap(), 1);
        assert_eq!(db.derive_month_end_snapshot(2021).unwrap(), 0);
    }
}
