//! The read-only tables behind every panel.

use crate::map::MapStyle;
use crate::{DEFAULT_STATE, SNAPSHOT_YEAR};
use covid_db::models::{CaseSnapshot, MaskUse, StateMaskUse};
use covid_db::Database;
use covid_nyt::source::RawDatasets;
use log::info;

/// Current value of the two dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Calendar month, 1-12
    pub month: u32,
    /// Full state name
    pub state: String,
}

impl Selection {
    pub fn new(month: u32, state: impl Into<String>) -> Self {
        Self {
            month,
            state: state.into(),
        }
    }
}

/// Derived tables, built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardContext {
    /// Month-end case snapshot, in snapshot order
    pub snapshot: Vec<CaseSnapshot>,
    /// Mask-use means per state, alphabetically
    pub state_mask_use: Vec<StateMaskUse>,
    /// Mask-use mean over every joined county
    pub us_average: Option<MaskUse>,
    /// Months with case data, ascending (slider range)
    pub months: Vec<u32>,
    /// States present in the snapshot, alphabetically (dropdown options)
    pub states: Vec<String>,
    pub map_style: MapStyle,
}

impl DashboardContext {
    /// Run the month-end pipeline for `year` and copy out its results.
    ///
    /// The database must already hold the source tables.
    pub fn build(db: &Database, year: i32) -> anyhow::Result<Self> {
        db.derive_month_end_snapshot(year)?;
        let context = Self {
            snapshot: db.query_case_snapshot()?,
            state_mask_use: db.query_state_mask_use()?,
            us_average: db.query_us_mask_average()?,
            months: db.query_case_months(year)?,
            states: db.query_snapshot_states()?,
            map_style: MapStyle::from_build_env(),
        };
        info!(
            "context: {} snapshot rows, {} states, {} months",
            context.snapshot.len(),
            context.states.len(),
            context.months.len()
        );
        Ok(context)
    }

    /// Load raw CSV text into a fresh database and build the context for
    /// [`SNAPSHOT_YEAR`].
    pub fn from_datasets(raw: &RawDatasets) -> anyhow::Result<Self> {
        let db = Database::new()?;
        db.load_datasets(raw)?;
        Self::build(&db, SNAPSHOT_YEAR)
    }

    /// Snapshot rows for one (state, month), in snapshot order.
    pub fn snapshot_rows(&self, state: &str, month: u32) -> Vec<&CaseSnapshot> {
        self.snapshot
            .iter()
            .filter(|r| r.state == state && r.month == month)
            .collect()
    }

    pub fn state_mask_use(&self, state: &str) -> Option<&MaskUse> {
        self.state_mask_use
            .iter()
            .find(|s| s.state == state)
            .map(|s| &s.mask_use)
    }

    /// [`DEFAULT_STATE`] when present, otherwise the first state.
    pub fn default_state(&self) -> Option<&str> {
        self.states
            .iter()
            .find(|s| s.as_str() == DEFAULT_STATE)
            .or_else(|| self.states.first())
            .map(|s| s.as_str())
    }

    /// (first, last) month with data.
    pub fn month_range(&self) -> Option<(u32, u32)> {
        match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }

    /// Initial selection: the earliest month and the default state.
    pub fn initial_selection(&self) -> Option<Selection> {
        let (first_month, _) = self.month_range()?;
        let state = self.default_state()?;
        Some(Selection::new(first_month, state))
    }
}
