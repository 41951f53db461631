// Analysis request/response envelopes
use super::chart::ChartData;
use super::insight::Insight;
use serde::{Deserialize, Serialize};

/// Body accepted by the analysis proxy. Both fields are optional on the wire
/// so a missing id can be reported as a client error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub dataset_id: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl AnalysisRequest {
    pub fn new(dataset_id: &str, file_path: &str) -> Self {
        Self {
            dataset_id: Some(dataset_id.to_string()),
            file_path: Some(file_path.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default)]
    pub dataset_id: String,
    #[serde(default)]
    pub charts: Vec<ChartData>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Uniform failure body returned by both proxy routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
