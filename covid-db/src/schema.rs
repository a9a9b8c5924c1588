//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Every table created by [`create_schema`].
pub const TABLES: [&str; 6] = [
    "cases",
    "counties",
    "states",
    "mask_use",
    "month_end_dates",
    "case_snapshot",
];

/// Returns the full SQL schema as a single batch string.
///
/// **Source tables** (filled by the loaders):
/// - `cases` - cumulative county case counts, with year/month split out of the date
/// - `counties` - county centroids
/// - `states` - state centroids
/// - `mask_use` - county mask-use survey fractions
///
/// **Derived tables** (filled by [`crate::Database::derive_month_end_snapshot`]):
/// - `month_end_dates` - the twelve month-end dates of the snapshot year
/// - `case_snapshot` - cases joined to coordinates and restricted to month ends
///
/// Source tables carry no uniqueness constraints: the joins reproduce
/// whatever multiplicity the upstream files have.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS cases (
        date TEXT NOT NULL,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        county TEXT NOT NULL,
        state TEXT NOT NULL,
        fips INTEGER,
        cases INTEGER NOT NULL,
        deaths INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_cases_date ON cases(date);
    CREATE INDEX IF NOT EXISTS idx_cases_county_fips ON cases(county, fips);

    CREATE TABLE IF NOT EXISTS counties (
        county TEXT NOT NULL,
        fips INTEGER,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_counties_county_fips ON counties(county, fips);

    CREATE TABLE IF NOT EXISTS states (
        abbrev TEXT NOT NULL,
        name TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS mask_use (
        countyfp INTEGER,
        never REAL NOT NULL,
        rarely REAL NOT NULL,
        sometimes REAL NOT NULL,
        frequently REAL NOT NULL,
        always REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_mask_use_countyfp ON mask_use(countyfp);

    CREATE TABLE IF NOT EXISTS month_end_dates (
        date TEXT PRIMARY KEY,
        month INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS case_snapshot (
        date TEXT NOT NULL,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        county TEXT NOT NULL,
        state TEXT NOT NULL,
        state_abbrev TEXT NOT NULL,
        fips INTEGER NOT NULL,
        cases INTEGER NOT NULL,
        deaths INTEGER,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        state_latitude REAL NOT NULL,
        state_longitude REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_snapshot_state_month ON case_snapshot(state, month);
    "#
}
