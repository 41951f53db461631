// Chart domain models
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A chart produced by the analysis backend.
///
/// On the wire this is `{type, title, data, options?}`; in memory the
/// `type`/`data` pair becomes a [`ChartBody`] variant so every chart kind
/// carries its own payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireChart", into = "WireChart")]
pub struct ChartData {
    pub title: String,
    pub body: ChartBody,
    pub options: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Bar(CategoryData),
    Line(CategoryData),
    Pie(PieData),
    Scatter(ScatterData),
    /// A chart type this dashboard cannot draw. The raw payload is kept as-is.
    Unknown { kind: String, data: Value },
}

impl ChartBody {
    pub fn kind(&self) -> &str {
        match self {
            ChartBody::Bar(_) => "bar",
            ChartBody::Line(_) => "line",
            ChartBody::Pie(_) => "pie",
            ChartBody::Scatter(_) => "scatter",
            ChartBody::Unknown { kind, .. } => kind,
        }
    }
}

/// Payload for bar and line charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<AxisLabel>,
    #[serde(default)]
    pub series: Vec<NumericSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Category axis labels are names for categorical columns and row indices
/// for trend charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisLabel {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisLabel::Text(text) => f.write_str(text),
            AxisLabel::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for AxisLabel {
    fn from(text: &str) -> Self {
        AxisLabel::Text(text.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieData {
    #[serde(default)]
    pub series: Vec<PieSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub value: f64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    #[serde(rename = "xAxisName", default, skip_serializing_if = "Option::is_none")]
    pub x_axis_name: Option<String>,
    #[serde(rename = "yAxisName", default, skip_serializing_if = "Option::is_none")]
    pub y_axis_name: Option<String>,
    #[serde(default)]
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartData {
    pub fn new(title: impl Into<String>, body: ChartBody) -> Self {
        Self {
            title: title.into(),
            body,
            options: None,
        }
    }

    /// Names of the series drawn by this chart, in legend order.
    pub fn series_names(&self) -> Vec<String> {
        match &self.body {
            ChartBody::Bar(data) | ChartBody::Line(data) => {
                data.series.iter().map(|s| s.name.clone()).collect()
            }
            ChartBody::Pie(data) => data.series.iter().map(|s| s.name.clone()).collect(),
            ChartBody::Scatter(data) => data.series.iter().map(|s| s.name.clone()).collect(),
            ChartBody::Unknown { .. } => Vec::new(),
        }
    }
}

/// Serialized form of [`ChartData`].
#[derive(Serialize, Deserialize)]
struct WireChart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Value>,
}

impl From<WireChart> for ChartData {
    fn from(wire: WireChart) -> Self {
        let WireChart {
            kind,
            title,
            data,
            options,
        } = wire;

        let body = match kind.as_str() {
            "bar" => ChartBody::Bar(decode_payload(&kind, &title, data)),
            "line" => ChartBody::Line(decode_payload(&kind, &title, data)),
            "pie" => ChartBody::Pie(decode_payload(&kind, &title, data)),
            "scatter" => ChartBody::Scatter(decode_payload(&kind, &title, data)),
            _ => ChartBody::Unknown { kind, data },
        };

        Self {
            title,
            body,
            options,
        }
    }
}

impl From<ChartData> for WireChart {
    fn from(chart: ChartData) -> Self {
        let kind = chart.body.kind().to_string();
        let data = match chart.body {
            ChartBody::Bar(data) | ChartBody::Line(data) => to_value(data),
            ChartBody::Pie(data) => to_value(data),
            ChartBody::Scatter(data) => to_value(data),
            ChartBody::Unknown { data, .. } => data,
        };

        Self {
            kind,
            title: chart.title,
            data,
            options: chart.options,
        }
    }
}

/// Malformed payloads degrade to an empty chart of the same kind.
fn decode_payload<T: DeserializeOwned + Default>(kind: &str, title: &str, data: Value) -> T {
    if data.is_null() {
        return T::default();
    }
    serde_json::from_value(data).unwrap_or_else(|e| {
        tracing::warn!("Malformed {} chart payload for '{}': {}", kind, title, e);
        T::default()
    })
}

fn to_value<T: Serialize>(payload: T) -> Value {
    // Payload types are plain data with string keys.
    serde_json::to_value(payload).unwrap_or(Value::Null)
}
