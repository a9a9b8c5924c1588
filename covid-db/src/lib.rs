//! In-memory SQLite join and derive pipeline for county COVID-19 data.
//!
//! The four source CSVs (cases, county centroids, state centroids, mask
//! use) are parsed with `covid-nyt` and loaded into an in-memory SQLite
//! database. [`Database::derive_month_end_snapshot`] then joins them into
//! the month-end case snapshot, and the query methods return typed,
//! serializable rows for the chart renderers.
//!
//! # Usage
//!
//! ```rust
//! use covid_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_cases("date,county,state,fips,cases,deaths\n2020-03-31,Cook,Illinois,17031,3727,\n").unwrap();
//! db.load_counties("County ,FIPS ,Latitude ,Longitude\nCook,17031,41.84,-87.82\n").unwrap();
//! db.load_bundled_states().unwrap();
//! db.load_mask_use("COUNTYFP,NEVER,RARELY,SOMETIMES,FREQUENTLY,ALWAYS\n17031,0.02,0.02,0.04,0.12,0.8\n").unwrap();
//!
//! db.derive_month_end_snapshot(2020).unwrap();
//! let snapshot = db.query_case_snapshot().unwrap();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot[0].state_abbrev, "IL");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

mod derive;
mod loader;
pub mod models;
mod queries;
pub mod schema;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the source and derived tables.
///
/// Cheaply cloneable (via `Rc`) for sharing inside a single-threaded
/// WASM app.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Row count of one of the schema's tables.
    pub fn count_rows(&self, table: &str) -> anyhow::Result<i64> {
        if !schema::TABLES.contains(&table) {
            anyhow::bail!("Unknown table `{}`", table);
        }
        let conn = self.conn.borrow();
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_bundled_states().unwrap();
        assert_eq!(
            db2.count_rows("states").unwrap(),
            52,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        for table in schema::TABLES {
            assert_eq!(db.count_rows(table).unwrap(), 0, "{} should start empty", table);
        }
    }

    #[test]
    fn count_rows_rejects_unknown_table() {
        let db = Database::new().unwrap();
        assert!(db.count_rows("sqlite_master; DROP TABLE cases").is_err());
    }
}
