// HTTP adapter for the external analysis backend
use crate::application::analysis_backend::{AnalysisBackend, BackendReply, CsvUpload};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpAnalysisBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnalysisBackend {
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/api/upload/", self.base_url)
    }

    fn analysis_url(&self, dataset_id: &str, file_path: &str) -> String {
        format!(
            "{}/api/analysis/{}?file_path={}",
            self.base_url,
            urlencoding::encode(dataset_id),
            urlencoding::encode(file_path)
        )
    }

    /// The backend always answers with JSON; anything else is a failure.
    async fn read_reply(response: reqwest::Response) -> Result<BackendReply> {
        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .with_context(|| format!("Failed to parse backend response (status {})", status))?;

        Ok(BackendReply::new(status, body))
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    async fn upload_dataset(&self, file: CsvUpload) -> Result<BackendReply> {
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .context("Invalid content type on uploaded file")?;
        }
        let form = Form::new().part("file", part);

        let url = self.upload_url();
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload to backend")?;

        Self::read_reply(response).await
    }

    async fn analyze_dataset(&self, dataset_id: &str, file_path: &str) -> Result<BackendReply> {
        let url = self.analysis_url(dataset_id, file_path);
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to send analysis request to backend")?;

        Self::read_reply(response).await
    }
}
