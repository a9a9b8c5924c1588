//! Query result model structs.
//!
//! All structs derive `Serialize` so the CLI can print them and the
//! dashboard can hand them to the browser as JSON.

use serde::Serialize;

/// Mask-use answer categories, in display order.
pub const MASK_USE_CATEGORIES: [&str; 5] = ["NEVER", "RARELY", "SOMETIMES", "FREQUENTLY", "ALWAYS"];

/// One row of the month-end case snapshot: a county's cumulative case count
/// on the last day of a month, joined with county and state centroids.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseSnapshot {
    /// Month-end date (YYYY-MM-DD)
    pub date: String,
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub county: String,
    /// Full state name
    pub state: String,
    pub state_abbrev: String,
    pub fips: u32,
    pub cases: i64,
    pub deaths: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
    pub state_latitude: f64,
    pub state_longitude: f64,
}

/// Mean mask-use fractions (0.0 - 1.0) over a set of counties.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MaskUse {
    pub never: f64,
    pub rarely: f64,
    pub sometimes: f64,
    pub frequently: f64,
    pub always: f64,
}

impl MaskUse {
    /// Fractions in [`MASK_USE_CATEGORIES`] order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.never,
            self.rarely,
            self.sometimes,
            self.frequently,
            self.always,
        ]
    }

    /// Percentages (fractions x 100) in [`MASK_USE_CATEGORIES`] order.
    pub fn percentages(&self) -> [f64; 5] {
        self.values().map(|v| v * 100.0)
    }
}

/// Mask-use means for one state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateMaskUse {
    pub state: String,
    pub mask_use: MaskUse,
}

/// Number of snapshot rows for a state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateRowCount {
    pub state: String,
    pub rows: i64,
}
