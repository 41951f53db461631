// Proxy service - Validates browser requests and relays them to the backend
use crate::application::analysis_backend::{AnalysisBackend, BackendReply, CsvUpload};
use crate::application::dashboard_service::ProxyApi;
use crate::domain::analysis::{AnalysisRequest, ErrorEnvelope};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("No file provided")]
    MissingFile,

    #[error("Only CSV files are supported")]
    NotCsv,

    #[error("Dataset ID is required")]
    MissingDatasetId,

    #[error("File too large")]
    TooLarge,

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Transport, decoding or request parsing failure.
    #[error("Internal server error")]
    Internal(String),
}

impl ProxyError {
    pub fn status(&self) -> u16 {
        match self {
            ProxyError::MissingFile | ProxyError::NotCsv | ProxyError::MissingDatasetId => 400,
            ProxyError::TooLarge => 413,
            ProxyError::Backend { status, .. } => *status,
            ProxyError::Internal(_) => 500,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.to_string())
    }
}

#[derive(Clone)]
pub struct ProxyService {
    backend: Arc<dyn AnalysisBackend>,
}

impl ProxyService {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    pub async fn forward_upload(&self, file: Option<CsvUpload>) -> Result<BackendReply, ProxyError> {
        let file = file.ok_or(ProxyError::MissingFile)?;
        if !file.file_name.ends_with(".csv") {
            return Err(ProxyError::NotCsv);
        }

        tracing::info!(
            "Forwarding upload {} ({} bytes)",
            file.file_name,
            file.bytes.len()
        );
        let reply = self.backend.upload_dataset(file).await.map_err(|e| {
            tracing::error!("Upload error: {:#}", e);
            ProxyError::Internal(format!("{:#}", e))
        })?;

        relay(reply)
    }

    pub async fn forward_analysis(&self, request: AnalysisRequest) -> Result<BackendReply, ProxyError> {
        let dataset_id = request
            .dataset_id
            .filter(|id| !id.is_empty())
            .ok_or(ProxyError::MissingDatasetId)?;
        let file_path = request.file_path.unwrap_or_default();

        tracing::info!("Forwarding analysis of {} ({})", dataset_id, file_path);
        let reply = self
            .backend
            .analyze_dataset(&dataset_id, &file_path)
            .await
            .map_err(|e| {
                tracing::error!("Analysis error: {:#}", e);
                ProxyError::Internal(format!("{:#}", e))
            })?;

        relay(reply)
    }
}

/// Pass 2xx replies through untouched; turn anything else into an error
/// carrying the backend's status and `detail`.
fn relay(reply: BackendReply) -> Result<BackendReply, ProxyError> {
    if reply.is_success() {
        return Ok(reply);
    }

    let message = reply.detail().unwrap_or_else(|| "Backend error".to_string());
    tracing::warn!("Backend responded with {}: {}", reply.status, message);
    Err(ProxyError::Backend {
        status: reply.status,
        message,
    })
}

fn into_reply(result: Result<BackendReply, ProxyError>) -> BackendReply {
    match result {
        Ok(reply) => reply,
        Err(e) => BackendReply::new(
            e.status(),
            serde_json::to_value(e.envelope()).unwrap_or(Value::Null),
        ),
    }
}

/// In-process access to the proxy routes for the dashboard page. The caller
/// sees the status and body a browser would get.
#[async_trait]
impl ProxyApi for ProxyService {
    async fn upload(&self, file: CsvUpload) -> anyhow::Result<BackendReply> {
        Ok(into_reply(self.forward_upload(Some(file)).await))
    }

    async fn analyze(&self, request: AnalysisRequest) -> anyhow::Result<BackendReply> {
        Ok(into_reply(self.forward_analysis(request).await))
    }
}
