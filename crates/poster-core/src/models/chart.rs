use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One category/value pair of a results chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    /// A pre-built SVG fragment carried in [`Chart::svg_content`].
    #[serde(rename = "generic-svg")]
    Generic,
}

/// A small tabular dataset rendered as the poster's results figure.
///
/// A chart is either absent from the document or fully populated; the
/// editor never stores a partially filled chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Chart {
    #[serde(default, rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    /// Raw SVG markup for [`ChartKind::Generic`]. Untrusted; it is only
    /// ever embedded after sanitization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_content: Option<String>,
}

impl Chart {
    /// The two-point chart the editor creates when a user adds a chart.
    pub fn starter() -> Self {
        Self {
            kind: ChartKind::Bar,
            title: "Analysis Results".to_string(),
            x_axis_label: "Category".to_string(),
            y_axis_label: "Value".to_string(),
            data: vec![DataPoint::new("A", 10.0), DataPoint::new("B", 20.0)],
            svg_content: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
