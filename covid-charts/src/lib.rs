//! Dashboard context, figure renderers and callback wiring.
//!
//! - `context`: the read-only tables every renderer reads, built once
//! - `figure`: Plotly-compatible figure model, serialized to JSON for the browser
//! - `render`: the `Render` outcome (`Updated` / `Unchanged`) and `RenderError`
//! - `map`, `bar`, `table`: the three panel renderers
//! - `callbacks`: (control, event) -> renderer registration table

pub mod bar;
pub mod callbacks;
pub mod context;
pub mod figure;
pub mod map;
pub mod render;
pub mod table;

/// Year whose month-end snapshots the dashboard shows.
pub const SNAPSHOT_YEAR: i32 = 2020;

/// State selected when the dashboard opens.
pub const DEFAULT_STATE: &str = "Illinois";

/// Page and plot background shared by every panel.
pub const BACKGROUND_COLOR: &str = "#171b26";
