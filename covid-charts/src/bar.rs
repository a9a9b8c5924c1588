//! Mask-use comparison bars (`mask-chart`).

use crate::context::{DashboardContext, Selection};
use crate::figure::{BarMarker, BarTrace, Figure, Trace};
use crate::render::{Render, RenderError};
use crate::BACKGROUND_COLOR;
use covid_db::models::{MaskUse, MASK_USE_CATEGORIES};
use serde_json::json;

pub const STATE_BAR_COLOR: &str = "rgb(125,183,203)";
pub const US_BAR_COLOR: &str = "rgb(145,147,148)";
pub const US_SERIES_NAME: &str = "US Average";

fn series(name: &str, mask_use: &MaskUse, color: &'static str) -> Trace {
    let percentages = mask_use.percentages().to_vec();
    Trace::Bar(BarTrace {
        x: MASK_USE_CATEGORIES.to_vec(),
        y: percentages.clone(),
        name: name.to_string(),
        marker: BarMarker { color },
        text: percentages,
        texttemplate: "%{text:.1f}",
        textposition: "outside",
    })
}

/// Grouped bars: the state's mask-use percentages next to the national ones.
pub fn mask_chart(state: &str, state_mask_use: &MaskUse, us_average: &MaskUse) -> Figure {
    let layout = json!({
        "autosize": true,
        "uniformtext": {"minsize": 8, "mode": "hide"},
        "margin": {"l": 10, "r": 0, "t": 0, "b": 50},
        "font": {"color": "#d8d8d8"},
        "xaxis": {"tickfont": {"size": 14}},
        "yaxis": {
            "title": {"text": "% Respondants", "font": {"size": 16}},
            "tickfont": {"size": 14},
            "showgrid": false,
        },
        "legend": {"x": 0, "y": 1.0, "bgcolor": "rgba(255,255,255,0)"},
        "barmode": "group",
        "bargap": 0.15,
        "bargroupgap": 0.1,
        "plot_bgcolor": BACKGROUND_COLOR,
        "paper_bgcolor": BACKGROUND_COLOR,
    });

    Figure {
        data: vec![
            series(state, state_mask_use, STATE_BAR_COLOR),
            series(US_SERIES_NAME, us_average, US_BAR_COLOR),
        ],
        layout,
    }
}

/// `mask-chart` callback.
///
/// Unlike the other two panels this one never answers `Unchanged`: a state
/// without a mask-use aggregate is an error.
pub fn render_mask_chart(
    ctx: &DashboardContext,
    selection: &Selection,
) -> Result<Render<Figure>, RenderError> {
    let state_mask_use = ctx
        .state_mask_use(&selection.state)
        .ok_or_else(|| RenderError::UnknownState(selection.state.clone()))?;
    let us_average = ctx.us_average.as_ref().ok_or(RenderError::NoMaskData)?;
    Ok(Render::Updated(mask_chart(
        &selection.state,
        state_mask_use,
        us_average,
    )))
}
