// Dashboard service - Upload then analyze, the way the dashboard page drives it
use crate::application::analysis_backend::{BackendReply, CsvUpload};
use crate::application::sample_data::{sample_charts, sample_insights};
use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};
use crate::domain::chart::ChartData;
use crate::domain::dataset::{DatasetSummary, UploadResponse};
use crate::domain::insight::Insight;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// The two proxy routes as the dashboard sees them: status and JSON body.
/// `Err` means the request itself failed, not that the proxy said no.
#[async_trait]
pub trait ProxyApi: Send + Sync {
    async fn upload(&self, file: CsvUpload) -> anyhow::Result<BackendReply>;

    async fn analyze(&self, request: AnalysisRequest) -> anyhow::Result<BackendReply>;
}

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The upload proxy answered `success: false` with this status.
    #[error("{message}")]
    Upload { status: u16, message: String },

    #[error("Upload request failed: {0}")]
    Request(String),

    #[error("Malformed upload response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Where the charts and insights currently on screen came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Live,
    Sample { reason: String },
}

/// Result of the analysis step.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Live {
        charts: Vec<ChartData>,
        insights: Vec<Insight>,
    },
    Sample {
        reason: String,
    },
}

impl AnalysisOutcome {
    /// Interpret the analysis proxy's JSON body.
    pub fn from_reply(body: Value) -> Self {
        if body.get("success").and_then(Value::as_bool) != Some(true) {
            let reason = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Analysis failed")
                .to_string();
            return AnalysisOutcome::Sample { reason };
        }

        match serde_json::from_value::<AnalysisResponse>(body) {
            Ok(response) => AnalysisOutcome::Live {
                charts: response.charts,
                insights: response.insights,
            },
            Err(e) => AnalysisOutcome::Sample {
                reason: format!("Unreadable analysis response: {}", e),
            },
        }
    }
}

/// Render state of the dashboard page.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: Option<DatasetSummary>,
    pub charts: Vec<ChartData>,
    pub insights: Vec<Insight>,
    pub is_loading: bool,
    pub source: Option<DataSource>,
}

/// Path the backend is asked to analyze for a freshly uploaded dataset.
pub fn staged_file_path(dataset_id: &str) -> String {
    format!("temp_{}.csv", dataset_id)
}

pub struct DashboardController {
    proxy: Arc<dyn ProxyApi>,
    state: DashboardState,
}

impl DashboardController {
    pub fn new(proxy: Arc<dyn ProxyApi>) -> Self {
        Self {
            proxy,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Upload `file`, then analyze it. Upload failures are returned; analysis
    /// failures switch the page to the sample data set.
    pub async fn handle_upload(&mut self, file: CsvUpload) -> Result<DatasetSummary, DashboardError> {
        self.state.is_loading = true;
        let result = self.upload_then_analyze(file).await;
        self.state.is_loading = false;

        if let Err(e) = &result {
            tracing::error!("Upload error: {}", e);
        }
        result
    }

    async fn upload_then_analyze(&mut self, file: CsvUpload) -> Result<DatasetSummary, DashboardError> {
        let reply = self
            .proxy
            .upload(file)
            .await
            .map_err(|e| DashboardError::Request(format!("{:#}", e)))?;

        if reply.body.get("success").and_then(Value::as_bool) != Some(true) {
            let message = reply
                .body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Upload failed");
            return Err(DashboardError::Upload {
                status: reply.status,
                message: message.to_string(),
            });
        }

        let upload: UploadResponse = serde_json::from_value(reply.body)?;
        if let Some(message) = &upload.message {
            tracing::info!("Uploaded {}: {}", upload.dataset_id, message);
        }
        let summary = upload.summary;
        self.state.summary = Some(summary.clone());

        let outcome = self.run_analysis(&summary.dataset_id).await;
        self.apply(outcome);

        Ok(summary)
    }

    async fn run_analysis(&self, dataset_id: &str) -> AnalysisOutcome {
        let request = AnalysisRequest::new(dataset_id, &staged_file_path(dataset_id));
        match self.proxy.analyze(request).await {
            Ok(reply) => AnalysisOutcome::from_reply(reply.body),
            Err(e) => {
                tracing::error!("Analysis error: {:#}", e);
                AnalysisOutcome::Sample {
                    reason: format!("{:#}", e),
                }
            }
        }
    }

    pub fn apply(&mut self, outcome: AnalysisOutcome) {
        match outcome {
            AnalysisOutcome::Live { charts, insights } => {
                self.state.charts = charts;
                self.state.insights = insights;
                self.state.source = Some(DataSource::Live);
            }
            AnalysisOutcome::Sample { reason } => {
                tracing::warn!("Showing sample data: {}", reason);
                self.state.charts = sample_charts();
                self.state.insights = sample_insights();
                self.state.source = Some(DataSource::Sample { reason });
            }
        }
    }
}
