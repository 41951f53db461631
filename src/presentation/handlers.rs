// HTTP request handlers
use crate::application::analysis_backend::CsvUpload;
use crate::application::dashboard_service::{
    DashboardController, DashboardError, DashboardState, ProxyApi,
};
use crate::application::proxy_service::ProxyError;
use crate::domain::analysis::AnalysisRequest;
use crate::infrastructure::http_response::{html_response, proxy_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use crate::presentation::uploader_view::is_csv_file;
use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{Html, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn multipart_error(e: MultipartError) -> ProxyError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ProxyError::TooLarge
    } else {
        ProxyError::Internal(e.body_text())
    }
}

/// Pull the `file` field out of a multipart form. A `file` field without a
/// file name (an empty file input) counts as no file.
async fn read_csv_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Option<CsvUpload>, ProxyError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::error!("Upload error: {}", rejection.body_text());
        ProxyError::Internal(rejection.body_text())
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if file_name.is_empty() {
            return Ok(None);
        }
        return Ok(Some(CsvUpload::new(file_name, content_type, bytes)));
    }

    Ok(None)
}

/// `POST /api/upload`
pub async fn upload_proxy(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let result = match read_csv_upload(multipart).await {
        Ok(file) => state.proxy_service.forward_upload(file).await,
        Err(e) => Err(e),
    };
    proxy_response(result)
}

/// `POST /api/analysis`
pub async fn analysis_proxy(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let result = match serde_json::from_slice::<AnalysisRequest>(&body) {
        Ok(request) => state.proxy_service.forward_analysis(request).await,
        Err(e) => {
            tracing::error!("Analysis error: invalid request body: {}", e);
            Err(ProxyError::Internal(e.to_string()))
        }
    };
    proxy_response(result)
}

/// `GET /`
pub async fn dashboard_page() -> Html<String> {
    Html(render_page(&DashboardState::default(), None))
}

fn page_with_error(status: StatusCode, message: &str) -> Response {
    html_response(status, render_page(&DashboardState::default(), Some(message)))
}

/// `POST /dashboard` - upload, analyze and render the result page.
pub async fn run_dashboard(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let file = match read_csv_upload(multipart).await {
        Ok(Some(file)) if is_csv_file(&file.file_name, file.content_type.as_deref()) => file,
        Ok(Some(_)) => return page_with_error(StatusCode::BAD_REQUEST, "Only CSV files are supported"),
        Ok(None) => return page_with_error(StatusCode::BAD_REQUEST, "Please choose a CSV file to upload"),
        Err(e) => {
            let status = StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return page_with_error(status, &e.to_string());
        }
    };

    let proxy: Arc<dyn ProxyApi> = state.proxy_service.clone();
    let mut controller = DashboardController::new(proxy);

    match controller.handle_upload(file).await {
        Ok(summary) => {
            tracing::info!(
                "Rendered dashboard for {} ({} rows, {} columns)",
                summary.dataset_id,
                summary.rows,
                summary.columns
            );
            html_response(StatusCode::OK, render_page(controller.state(), None))
        }
        Err(e) => {
            let status = match &e {
                // Rejections (validation, size) keep their client status.
                DashboardError::Upload { status, .. } if (400..500).contains(status) => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
                }
                DashboardError::Upload { .. }
                | DashboardError::Request(_)
                | DashboardError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            };
            html_response(status, render_page(controller.state(), Some(&e.to_string())))
        }
    }
}
