//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use covid_charts::context::DashboardContext;
use covid_charts::DEFAULT_STATE;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Derived tables (None until loaded)
    pub context: Signal<Option<Rc<DashboardContext>>>,
    /// Whether the datasets are still loading
    pub loading: Signal<bool>,
    /// Fatal load error
    pub error_msg: Signal<Option<String>>,
    /// Last renderer error, shown next to the panels
    pub render_error: Signal<Option<String>>,
    /// Month selected on the slider (1-12)
    pub selected_month: Signal<u32>,
    /// State selected in the dropdown
    pub selected_state: Signal<String>,
    /// Months with data, ascending
    pub months: Signal<Vec<u32>>,
    /// Dropdown options
    pub states: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            context: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            render_error: Signal::new(None),
            selected_month: Signal::new(1),
            selected_state: Signal::new(DEFAULT_STATE.to_string()),
            months: Signal::new(Vec::new()),
            states: Signal::new(Vec::new()),
        }
    }
}
