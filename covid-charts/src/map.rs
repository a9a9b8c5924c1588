//! County case map (`state-chart`).
//!
//! One marker per county for the selected state and month, colored into
//! four buckets by cumulative cases. The bucket thresholds come only from
//! the minimum and maximum case counts:
//!
//! ```text
//! mid      = (max - min) / 2
//! low_mid  = (mid - min) / 2
//! high_mid = (max - mid) / 2
//! ```
//!
//! These are not quartiles. `high_mid = (max + min) / 4`, so bucket 2
//! (`mid < c <= high_mid`) is never hit by a count in `[min, max]`: when
//! `max >= 3 * min` then `high_mid <= mid`, and otherwise both `mid` and
//! `high_mid` fall below `min`. The map only ever shows buckets 0, 1 and 3.
//! The arithmetic is kept as is.

use crate::context::{DashboardContext, Selection};
use crate::figure::{Figure, MapMarker, ScatterMapboxTrace, Trace};
use crate::render::{Render, RenderError};
use crate::BACKGROUND_COLOR;
use covid_db::models::CaseSnapshot;
use serde_json::json;

/// Bucket colors, lowest bucket first.
pub const BUCKET_COLORS: [&str; 4] = ["#00FF00", "#FFE400", "#FF6900", "#FF0000"];

/// Continuous scale shown on the color bar.
pub const COLOR_SCALE: [(f64, &str); 4] = [
    (0.0, "#00FF00"),
    (0.33, "#FFE400"),
    (0.66, "#FF6900"),
    (1.0, "#FF0000"),
];

const BASE_MARKER_SIZE: f64 = 15.0;
const MAP_PITCH: u32 = 5;
const MAP_ZOOM: u32 = 5;
const AXIS_TEXT_COLOR: &str = "#d8d8d8";

/// Base map configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    pub access_token: Option<String>,
    pub style: String,
}

impl MapStyle {
    /// Dark style that needs no Mapbox token.
    pub const TOKENLESS_STYLE: &'static str = "carto-darkmatter";
    /// Dark Mapbox style, used when a token is configured.
    pub const MAPBOX_STYLE: &'static str = "mapbox://styles/mapbox/dark-v10";

    pub fn tokenless() -> Self {
        Self {
            access_token: None,
            style: Self::TOKENLESS_STYLE.to_string(),
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            style: Self::MAPBOX_STYLE.to_string(),
        }
    }

    /// Mapbox style when `MAPBOX_ACCESS_TOKEN` was set at compile time,
    /// tokenless otherwise.
    pub fn from_build_env() -> Self {
        match option_env!("MAPBOX_ACCESS_TOKEN") {
            Some(token) if !token.trim().is_empty() => Self::with_token(token.trim()),
            _ => Self::tokenless(),
        }
    }
}

/// Bucket thresholds derived from the case range of one (state, month).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseThresholds {
    pub min: f64,
    pub max: f64,
    pub mid: f64,
    pub low_mid: f64,
    pub high_mid: f64,
}

impl CaseThresholds {
    pub fn new(min: i64, max: i64) -> Self {
        let (min, max) = (min as f64, max as f64);
        let mid = (max - min) / 2.0;
        let low_mid = (mid - min) / 2.0;
        let high_mid = (max - mid) / 2.0;
        Self {
            min,
            max,
            mid,
            low_mid,
            high_mid,
        }
    }

    /// Thresholds for a set of case counts; `None` when empty.
    pub fn from_cases<I: IntoIterator<Item = i64>>(cases: I) -> Option<Self> {
        let mut iter = cases.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c)));
        Some(Self::new(min, max))
    }

    /// Color bucket (0-3) for a case count, checked against `low_mid`,
    /// `mid` and `high_mid` in that order.
    pub fn bucket(&self, cases: i64) -> usize {
        let value = cases as f64;
        if value <= self.low_mid {
            0
        } else if value <= self.mid {
            1
        } else if value <= self.high_mid {
            2
        } else {
            3
        }
    }

    /// `15 * (1 + (cases + min) / max)`; a zero maximum gives the base size.
    pub fn marker_size(&self, cases: i64) -> f64 {
        if self.max == 0.0 {
            return BASE_MARKER_SIZE;
        }
        BASE_MARKER_SIZE * (1.0 + (cases as f64 + self.min) / self.max)
    }
}

/// Build the map figure for already-filtered rows; `None` when there are none.
pub fn state_chart(rows: &[&CaseSnapshot], style: &MapStyle) -> Option<Figure> {
    let thresholds = CaseThresholds::from_cases(rows.iter().map(|r| r.cases))?;

    let data = rows
        .iter()
        .map(|row| {
            let bucket = thresholds.bucket(row.cases);
            Trace::Scattermapbox(ScatterMapboxTrace {
                lat: vec![row.latitude],
                lon: vec![row.longitude],
                mode: "markers",
                marker: MapMarker {
                    color: BUCKET_COLORS[bucket],
                    showscale: true,
                    colorscale: COLOR_SCALE.to_vec(),
                    cmin: thresholds.min,
                    cmax: thresholds.max,
                    size: thresholds.marker_size(row.cases),
                    colorbar: json!({
                        "title": {"text": "Number of Covid Cases", "font": {"color": AXIS_TEXT_COLOR}},
                        "x": 0.93,
                        "xpad": 0,
                        "tickfont": {"color": AXIS_TEXT_COLOR},
                        "thicknessmode": "pixels",
                    }),
                },
                opacity: 0.8,
                hoverinfo: "text",
                text: format!("{}<br>Covid Cases: {}", row.county, row.cases),
                bucket,
            })
        })
        .collect();

    let count = rows.len() as f64;
    let center_lat = rows.iter().map(|r| r.latitude).sum::<f64>() / count;
    let center_lon = rows.iter().map(|r| r.longitude).sum::<f64>() / count;

    let layout = json!({
        "plot_bgcolor": BACKGROUND_COLOR,
        "paper_bgcolor": BACKGROUND_COLOR,
        "clickmode": "event+select",
        "hovermode": "closest",
        "showlegend": false,
        "margin": {"l": 0, "r": 35, "t": 0, "b": 0},
        "mapbox": {
            "accesstoken": style.access_token,
            "center": {"lat": center_lat, "lon": center_lon},
            "pitch": MAP_PITCH,
            "zoom": MAP_ZOOM,
            "style": style.style,
        },
        "autosize": true,
    });

    Some(Figure { data, layout })
}

/// `state-chart` callback: `Unchanged` when the state has no rows that month.
pub fn render_state_chart(
    ctx: &DashboardContext,
    selection: &Selection,
) -> Result<Render<Figure>, RenderError> {
    let rows = ctx.snapshot_rows(&selection.state, selection.month);
    Ok(match state_chart(&rows, &ctx.map_style) {
        Some(figure) => Render::Updated(figure),
        None => Render::Unchanged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn markers(figure: &Figure) -> Vec<&ScatterMapboxTrace> {
        figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scattermapbox(m) => m,
                other => panic!("unexpected trace {:?}", other),
            })
            .collect()
    }

    #[test]
    fn thresholds_for_cook_and_dupage() {
        let t = CaseThresholds::from_cases([100, 10]).unwrap();
        assert_eq!(t.min, 10.0);
        assert_eq!(t.max, 100.0);
        assert_eq!(t.mid, 45.0);
        assert_eq!(t.low_mid, 17.5);
        assert_eq!(t.high_mid, 27.5);
        assert_eq!(t.bucket(100), 3);
        assert_eq!(t.bucket(10), 0);
        assert_eq!(t.bucket(40), 1);
    }

    #[test]
    fn high_mid_below_mid_skips_bucket_two() {
        // mid = 45, high_mid = 27.5: nothing can land in bucket 2
        let t = CaseThresholds::new(10, 100);
        assert!(t.high_mid < t.mid);
        assert!((0..=200).all(|c| t.bucket(c) != 2));
    }

    #[test]
    fn zero_min_thresholds() {
        // min = 0: mid = 50, low_mid = 25, high_mid = 25
        let t = CaseThresholds::new(0, 100);
        assert_eq!(t.low_mid, 25.0);
        assert_eq!(t.high_mid, 25.0);
        // min = 0, max = 0: every count sits in bucket 0
        assert_eq!(CaseThresholds::new(0, 0).bucket(0), 0);
    }

    #[test]
    fn bucket_two_never_hit_within_range() {
        for min in 0..60 {
            for max in min..200 {
                let t = CaseThresholds::new(min, max);
                assert!(
                    (min..=max).all(|c| t.bucket(c) != 2),
                    "min {} max {}",
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn marker_size_formula() {
        let t = CaseThresholds::new(10, 100);
        assert!((t.marker_size(100) - 15.0 * 2.1).abs() < 1e-9);
        assert!((t.marker_size(10) - 15.0 * 1.2).abs() < 1e-9);
        assert_eq!(CaseThresholds::new(0, 0).marker_size(0), 15.0);
    }

    #[test]
    fn one_marker_per_county_with_consistent_buckets() {
        let ctx = testing::context();
        let selection = Selection::new(3, "Illinois");
        let figure = render_state_chart(&ctx, &selection)
            .unwrap()
            .updated()
            .unwrap();
        let markers = markers(&figure);
        assert_eq!(markers.len(), ctx.snapshot_rows("Illinois", 3).len());

        let thresholds = CaseThresholds::new(10, 100);
        for (marker, row) in markers.iter().zip(ctx.snapshot_rows("Illinois", 3)) {
            assert_eq!(marker.bucket, thresholds.bucket(row.cases));
            assert_eq!(marker.marker.color, BUCKET_COLORS[marker.bucket]);
            assert_eq!(marker.lat, vec![row.latitude]);
        }
        assert_eq!(markers[0].text, "Cook<br>Covid Cases: 100");
        assert_eq!(markers[0].marker.color, "#FF0000");
        assert_eq!(markers[1].marker.color, "#00FF00");
    }

    #[test]
    fn map_is_centered_on_mean_position() {
        let ctx = testing::context();
        let figure = render_state_chart(&ctx, &Selection::new(3, "Illinois"))
            .unwrap()
            .updated()
            .unwrap();
        let rows = ctx.snapshot_rows("Illinois", 3);
        let mean_lat = rows.iter().map(|r| r.latitude).sum::<f64>() / rows.len() as f64;
        let center = &figure.layout["mapbox"]["center"];
        assert!((center["lat"].as_f64().unwrap() - mean_lat).abs() < 1e-9);
        assert_eq!(figure.layout["mapbox"]["zoom"], 5);
        assert_eq!(figure.layout["mapbox"]["style"], MapStyle::TOKENLESS_STYLE);
        assert!(figure.layout["mapbox"]["accesstoken"].is_null());
    }

    #[test]
    fn empty_selection_is_unchanged() {
        let ctx = testing::context();
        let outcome = render_state_chart(&ctx, &Selection::new(1, "Illinois")).unwrap();
        assert!(outcome.is_unchanged());
    }

    #[test]
    fn token_selects_mapbox_style() {
        let style = MapStyle::with_token("pk.test");
        assert_eq!(style.style, MapStyle::MAPBOX_STYLE);
        assert_eq!(style.access_token.as_deref(), Some("pk.test"));
    }
}
