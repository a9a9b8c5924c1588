//! Headless dashboard: build the context and print panels or state counts.

use anyhow::bail;
use covid_charts::callbacks::{CallbackRegistry, Dispatch, PanelId};
use covid_charts::context::{DashboardContext, Selection};
use covid_charts::render::Render;
use covid_charts::SNAPSHOT_YEAR;
use covid_db::models::StateRowCount;
use covid_db::Database;
use covid_nyt::source::RawDatasets;
use log::{info, warn};
use serde_json::{json, Value};

/// One JSON document per dispatched panel.
///
/// `Updated` carries the Plotly figure, `Unchanged` is flagged, and renderer
/// errors carry their message.
pub fn panel_document(dispatch: &Dispatch) -> anyhow::Result<Value> {
    let panel = dispatch.panel.id();
    Ok(match &dispatch.outcome {
        Ok(Render::Updated(figure)) => json!({
            "panel": panel,
            "figure": serde_json::to_value(figure)?,
        }),
        Ok(Render::Unchanged) => json!({"panel": panel, "unchanged": true}),
        Err(e) => json!({"panel": panel, "error": e.to_string()}),
    })
}

/// Dispatch every callback for the selection, optionally keeping one panel.
pub fn render_panels(
    ctx: &DashboardContext,
    selection: &Selection,
    panel: Option<&str>,
) -> anyhow::Result<Vec<Value>> {
    let only = match panel {
        Some(id) => match PanelId::from_id(id) {
            Some(p) => Some(p),
            None => bail!(
                "Unknown panel '{}' (expected one of: {})",
                id,
                PanelId::ALL.map(|p| p.id()).join(", ")
            ),
        },
        None => None,
    };

    let registry = CallbackRegistry::dashboard();
    registry
        .dispatch_all(ctx, selection)
        .iter()
        .filter(|d| only.map_or(true, |p| d.panel == p))
        .map(|d| {
            if let Err(e) = &d.outcome {
                warn!("{}: {}", d.panel.id(), e);
            }
            panel_document(d)
        })
        .collect()
}

pub fn run_render(
    raw: &RawDatasets,
    state: &str,
    month: u32,
    panel: Option<&str>,
) -> anyhow::Result<()> {
    let ctx = DashboardContext::from_datasets(raw)?;
    let selection = Selection::new(month, state);
    info!("Rendering {} for month {}", selection.state, selection.month);

    for document in render_panels(&ctx, &selection, panel)? {
        println!("{}", serde_json::to_string(&document)?);
    }
    Ok(())
}

/// States in the month-end snapshot with their row counts, alphabetically.
pub fn state_counts(raw: &RawDatasets) -> anyhow::Result<Vec<StateRowCount>> {
    let db = Database::new()?;
    db.load_datasets(raw)?;
    db.derive_month_end_snapshot(SNAPSHOT_YEAR)?;
    db.query_snapshot_state_counts()
}

pub fn run_states(raw: &RawDatasets) -> anyhow::Result<()> {
    let counts = state_counts(raw)?;
    if counts.is_empty() {
        warn!("No snapshot rows for {}", SNAPSHOT_YEAR);
    }
    for count in counts {
        println!("{}\t{}", count.state, count.rows);
    }
    Ok(())
}
