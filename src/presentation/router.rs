use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    analysis_proxy, dashboard_page, health_check, run_dashboard, service_info, upload_proxy,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/dashboard", post(run_dashboard))
        .route("/healthz", get(health_check))
        .route("/api", get(service_info))
        .route("/api/upload", post(upload_proxy))
        .route("/api/analysis", post(analysis_proxy))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analysis_backend::BackendReply;
    use crate::application::proxy_service::tests::RecordingBackend;
    use crate::application::proxy_service::ProxyService;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "----dashboard-test-boundary";

    fn router_with(backend: Arc<RecordingBackend>) -> Router {
        let state = Arc::new(AppState {
            proxy_service: Arc::new(ProxyService::new(backend)),
        });
        build_router(state, 1024 * 1024)
    }

    fn multipart_request(uri: &str, file: Option<(&str, &str, &str)>) -> Request<Body> {
        let mut body = String::new();
        match file {
            Some((name, content_type, content)) => body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\nContent-Type: {content_type}\r\n\r\n{content}\r\n"
            )),
            None => body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n"
            )),
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn upload_ok() -> BackendReply {
        BackendReply::new(
            200,
            json!({
                "success": true,
                "dataset_id": "ds_5e1f00aa77c2",
                "summary": {
                    "dataset_id": "ds_5e1f00aa77c2",
                    "rows": 2,
                    "columns": 2,
                    "column_names": ["a", "b"]
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_health_and_info() {
        let app = router_with(Arc::new(RecordingBackend::default()));

        let response = app
            .clone()
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");

        let response = app
            .oneshot(Request::get("/api").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["name"], "csv-insight-dashboard");
    }

    #[tokio::test]
    async fn test_upload_without_file_is_400() {
        let backend = Arc::new(RecordingBackend::default());
        let app = router_with(backend.clone());

        let response = app.oneshot(multipart_request("/api/upload", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "No file provided"})
        );
        assert!(backend.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_non_csv_is_400_and_not_forwarded() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(upload_ok()),
            ..Default::default()
        });
        let app = router_with(backend.clone());

        let response = app
            .oneshot(multipart_request(
                "/api/upload",
                Some(("data.json", "application/json", "{}")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "Only CSV files are supported"})
        );
        assert!(backend.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_relays_backend_body() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(upload_ok()),
            ..Default::default()
        });
        let app = router_with(backend.clone());

        let response = app
            .oneshot(multipart_request(
                "/api/upload",
                Some(("data.csv", "text/csv", "a,b\n1,2\n3,4")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, upload_ok().body);
        assert_eq!(*backend.uploads.lock().unwrap(), vec!["data.csv".to_string()]);
    }

    #[tokio::test]
    async fn test_upload_relays_backend_error_status() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(BackendReply::new(400, json!({"detail": "Only CSV files are allowed"}))),
            ..Default::default()
        });
        let app = router_with(backend);

        let response = app
            .oneshot(multipart_request(
                "/api/upload",
                Some(("data.csv", "application/octet-stream", "a,b")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "Only CSV files are allowed"})
        );
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_413() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(upload_ok()),
            ..Default::default()
        });
        let state = Arc::new(AppState {
            proxy_service: Arc::new(ProxyService::new(backend.clone())),
        });
        let app = build_router(state, 256);
        let content = "a,b\n".repeat(512);

        let response = app
            .oneshot(multipart_request(
                "/api/upload",
                Some(("big.csv", "text/csv", &content)),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "File too large"})
        );
        assert!(backend.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_with_non_multipart_body_is_500() {
        let app = router_with(Arc::new(RecordingBackend::default()));

        let response = app.oneshot(json_request("/api/upload", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_analysis_missing_dataset_id_is_400() {
        let backend = Arc::new(RecordingBackend::default());
        let app = router_with(backend.clone());

        let response = app
            .oneshot(json_request("/api/analysis", r#"{"file_path": "temp_x.csv"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "Dataset ID is required"})
        );
        assert!(backend.analyses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_relays_not_found() {
        let backend = Arc::new(RecordingBackend {
            analysis_reply: Some(BackendReply::new(404, json!({"detail": "File not found"}))),
            ..Default::default()
        });
        let app = router_with(backend.clone());

        let response = app
            .oneshot(json_request(
                "/api/analysis",
                r#"{"dataset_id": "ds_1", "file_path": "temp_ds_1.csv"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "File not found"})
        );
        assert_eq!(
            *backend.analyses.lock().unwrap(),
            vec![("ds_1".to_string(), "temp_ds_1.csv".to_string())]
        );
    }

    #[tokio::test]
    async fn test_analysis_invalid_json_is_500() {
        let app = router_with(Arc::new(RecordingBackend::default()));

        let response = app.oneshot(json_request("/api/analysis", "not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_dashboard_falls_back_to_sample_data() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(upload_ok()),
            analysis_reply: Some(BackendReply::new(404, json!({"detail": "File not found"}))),
            ..Default::default()
        });
        let app = router_with(backend.clone());

        let response = app
            .oneshot(multipart_request(
                "/dashboard",
                Some(("data.csv", "text/csv", "a,b\n1,2\n3,4")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Dataset Summary"));
        assert!(page.contains("ds_5e1f0"));
        assert!(page.contains("Showing sample data."));
        assert!(page.contains("Department Distribution"));
        assert!(page.contains("Performance Improvement Trend"));
        assert_eq!(
            *backend.analyses.lock().unwrap(),
            vec![("ds_5e1f00aa77c2".to_string(), "temp_ds_5e1f00aa77c2.csv".to_string())]
        );
    }

    #[tokio::test]
    async fn test_dashboard_renders_live_analysis() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(upload_ok()),
            analysis_reply: Some(BackendReply::new(
                200,
                json!({
                    "success": true,
                    "dataset_id": "ds_5e1f00aa77c2",
                    "charts": [{"type": "line", "title": "Trend of a", "data": {"categories": [0, 1], "series": [{"name": "a", "data": [1, 3]}]}}],
                    "insights": [{"id": "insight_9", "title": "Statistical Summary - a", "description": "Mean: 2.00", "type": "summary"}]
                }),
            )),
            ..Default::default()
        });
        let app = router_with(backend);

        let response = app
            .oneshot(multipart_request(
                "/dashboard",
                Some(("data.csv", "text/csv", "a,b\n1,2\n3,4")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Trend of a"));
        assert!(page.contains("Statistical Summary - a"));
        assert!(!page.contains("Showing sample data."));
        assert!(!page.contains("Department Distribution"));
    }

    #[tokio::test]
    async fn test_dashboard_backend_upload_failure_is_bad_gateway() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(BackendReply::new(503, json!({"detail": "Service Unavailable"}))),
            ..Default::default()
        });
        let app = router_with(backend.clone());

        let response = app
            .oneshot(multipart_request(
                "/dashboard",
                Some(("data.csv", "text/csv", "a,b")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let page = body_text(response).await;
        assert!(page.contains(r#"<div class="notice notice-error">Service Unavailable</div>"#));
        assert!(!page.contains("Dataset Summary"));
        assert!(backend.analyses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_rejects_non_csv_before_upload() {
        let backend = Arc::new(RecordingBackend::default());
        let app = router_with(backend.clone());

        let response = app
            .oneshot(multipart_request(
                "/dashboard",
                Some(("photo.png", "image/png", "png")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response)
            .await
            .contains(r#"<div class="notice notice-error">Only CSV files are supported</div>"#));
        assert!(backend.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_backend_rejection_keeps_client_status() {
        let backend = Arc::new(RecordingBackend {
            upload_reply: Some(BackendReply::new(400, json!({"detail": "Empty CSV file"}))),
            ..Default::default()
        });
        let app = router_with(backend.clone());

        let response = app
            .oneshot(multipart_request(
                "/dashboard",
                Some(("empty.csv", "text/csv", "")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response)
            .await
            .contains(r#"<div class="notice notice-error">Empty CSV file</div>"#));
        assert!(backend.analyses.lock().unwrap().is_empty());
    }
}
