//! County case table (`state-table`).

use crate::context::{DashboardContext, Selection};
use crate::figure::{Figure, TableCells, TableTrace, Trace};
use crate::render::{Render, RenderError};
use crate::BACKGROUND_COLOR;
use covid_db::models::CaseSnapshot;
use serde_json::json;

const TABLE_FILL: &str = "#252e3f";
const ROW_HEIGHT: u32 = 40;

/// Table of counties for already-filtered rows, most cases first.
///
/// `None` when there are no rows. Ties keep snapshot order.
pub fn state_table(rows: &[&CaseSnapshot]) -> Option<Figure> {
    if rows.is_empty() {
        return None;
    }
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.cases.cmp(&a.cases));

    let cells = TableCells {
        values: (
            sorted.iter().map(|r| r.month).collect(),
            sorted.iter().map(|r| r.state.clone()).collect(),
            sorted.iter().map(|r| r.county.clone()).collect(),
            sorted.iter().map(|r| r.cases).collect(),
        ),
        fill: json!({"color": TABLE_FILL}),
        align: "left",
        height: ROW_HEIGHT,
        line: json!({"width": 0.5}),
        font: json!({"color": "white", "size": 12}),
    };

    let header = json!({
        "values": [["<b>MONTH</b>"], ["<b>STATE</b>"], ["<b>COUNTY</b>"], ["<b>Number of Cases</b>"]],
        "fill": {"color": TABLE_FILL},
        "line": {"color": "#FFFFFF", "width": 0.5},
        "align": "left",
        "height": ROW_HEIGHT,
        "font": {"color": "white"},
    });

    let layout = json!({
        "showlegend": false,
        "autosize": true,
        "margin": {"l": 10, "r": 0, "t": 35, "b": 0},
        "paper_bgcolor": BACKGROUND_COLOR,
    });

    Some(Figure {
        data: vec![Trace::Table(TableTrace { header, cells })],
        layout,
    })
}

/// `state-table` callback: `Unchanged` when the state has no rows that month.
pub fn render_state_table(
    ctx: &DashboardContext,
    selection: &Selection,
) -> Result<Render<Figure>, RenderError> {
    let rows = ctx.snapshot_rows(&selection.state, selection.month);
    Ok(match state_table(&rows) {
        Some(figure) => Render::Updated(figure),
        None => Render::Unchanged,
    })
}
