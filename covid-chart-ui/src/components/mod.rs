//! Reusable Dioxus RSX components for the COVID dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod month_slider;
mod state_selector;

pub use chart_container::{panel_min_height, ChartContainer};
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use month_slider::MonthSlider;
pub use state_selector::StateSelector;
