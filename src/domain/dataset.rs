// Dataset domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shape of an uploaded dataset as reported by the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset_id: String,
    pub rows: u64,
    pub columns: u64,
    pub column_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DatasetSummary {
    #[cfg(test)]
    pub fn new(dataset_id: String, rows: u64, columns: u64, column_names: Vec<String>) -> Self {
        Self {
            dataset_id,
            rows,
            columns,
            column_names,
            file_name: None,
            file_size: None,
            created_at: None,
        }
    }

    /// First eight characters of the dataset id, used as a compact label.
    pub fn short_id(&self) -> &str {
        match self.dataset_id.char_indices().nth(8) {
            Some((idx, _)) => &self.dataset_id[..idx],
            None => &self.dataset_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub dataset_id: String,
    pub summary: DatasetSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
