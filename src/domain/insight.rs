// Insight domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A narrative finding about a dataset. Display text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Insight {
    pub fn new(id: &str, title: &str, description: &str, kind: InsightKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            confidence: None,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsightKind {
    Trend,
    Anomaly,
    Correlation,
    Summary,
    /// Any category the backend adds later; rendered with the default style.
    Other(String),
}

impl InsightKind {
    pub fn as_str(&self) -> &str {
        match self {
            InsightKind::Trend => "trend",
            InsightKind::Anomaly => "anomaly",
            InsightKind::Correlation => "correlation",
            InsightKind::Summary => "summary",
            InsightKind::Other(kind) => kind,
        }
    }
}

impl From<String> for InsightKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "trend" => InsightKind::Trend,
            "anomaly" => InsightKind::Anomaly,
            "correlation" => InsightKind::Correlation,
            "summary" => InsightKind::Summary,
            _ => InsightKind::Other(kind),
        }
    }
}

impl From<InsightKind> for String {
    fn from(kind: InsightKind) -> Self {
        match kind {
            InsightKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
