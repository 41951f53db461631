// Port for the external analysis backend
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

/// A file received from the browser, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }
}

/// Status and JSON body exactly as the backend returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
}

impl BackendReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The backend's `detail` field, which carries its error message.
    pub fn detail(&self) -> Option<String> {
        match self.body.get("detail")? {
            Value::Null => None,
            Value::String(detail) if detail.is_empty() => None,
            Value::String(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Store a CSV file and return its dataset summary.
    async fn upload_dataset(&self, file: CsvUpload) -> anyhow::Result<BackendReply>;

    /// Run the analysis for a stored dataset and return charts and insights.
    async fn analyze_dataset(&self, dataset_id: &str, file_path: &str) -> anyhow::Result<BackendReply>;
}
