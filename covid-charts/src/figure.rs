//! Plotly-compatible figure model.
//!
//! A [`Figure`] serializes to the `{data, layout}` object accepted by
//! `Plotly.react`. Traces are typed; layouts are free-form JSON because each
//! panel sets a different handful of keys.

use serde::Serialize;
use serde_json::Value;

/// A complete Plotly figure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Value,
}

impl Figure {
    /// The `{data, layout}` object as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One Plotly trace, tagged with its Plotly `type`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scattermapbox(ScatterMapboxTrace),
    Bar(BarTrace),
    Table(TableTrace),
}

/// A single county marker on the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterMapboxTrace {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub mode: &'static str,
    pub marker: MapMarker,
    pub opacity: f64,
    pub hoverinfo: &'static str,
    pub text: String,
    /// Color bucket (0-3) the marker was assigned to.
    #[serde(skip)]
    pub bucket: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub color: &'static str,
    pub showscale: bool,
    pub colorscale: Vec<(f64, &'static str)>,
    pub cmin: f64,
    pub cmax: f64,
    pub size: f64,
    pub colorbar: Value,
}

/// One bar series across the mask-use categories.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub x: Vec<&'static str>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: BarMarker,
    pub text: Vec<f64>,
    pub texttemplate: &'static str,
    pub textposition: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarMarker {
    pub color: &'static str,
}

/// A Plotly table. Cell values are column-major.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableTrace {
    pub header: Value,
    pub cells: TableCells,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableCells {
    /// (month, state, county, cases) columns
    pub values: (Vec<u32>, Vec<String>, Vec<String>, Vec<i64>),
    pub fill: Value,
    pub align: &'static str,
    pub height: u32,
    pub line: Value,
    pub font: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_json_of_empty_figure() {
        let figure = Figure {
            data: Vec::new(),
            layout: json!({"showlegend": false}),
        };
        let text = figure.to_json().unwrap();
        assert_eq!(text, r#"{"data":[],"layout":{"showlegend":false}}"#);
    }

    #[test]
    fn traces_serialize_with_plotly_type_tag() {
        let figure = Figure {
            data: vec![Trace::Bar(BarTrace {
                x: vec!["NEVER"],
                y: vec![2.5],
                name: "Illinois".to_string(),
                marker: BarMarker {
                    color: "rgb(125,183,203)",
                },
                text: vec![2.5],
                texttemplate: "%{text:.1f}",
                textposition: "outside",
            })],
            layout: json!({"barmode": "group"}),
        };
        let value: Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(value["data"][0]["type"], "bar");
        assert_eq!(value["data"][0]["marker"]["color"], "rgb(125,183,203)");
        assert_eq!(value["layout"]["barmode"], "group");
    }

    #[test]
    fn table_cells_serialize_column_major() {
        let cells = TableCells {
            values: (
                vec![3, 3],
                vec!["Illinois".to_string(), "Illinois".to_string()],
                vec!["Cook".to_string(), "DuPage".to_string()],
                vec![100, 10],
            ),
            fill: json!({"color": "#252e3f"}),
            align: "left",
            height: 40,
            line: json!({"width": 0.5}),
            font: json!({"color": "white"}),
        };
        let value = serde_json::to_value(&cells).unwrap();
        assert_eq!(value["values"][2], json!(["Cook", "DuPage"]));
        assert_eq!(value["values"][3], json!([100, 10]));
    }
}
