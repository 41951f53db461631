// HTTP response utilities for the JSON proxy envelope
use crate::application::analysis_backend::BackendReply;
use crate::application::proxy_service::ProxyError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

fn status_code(status: u16, fallback: StatusCode) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(fallback)
}

/// Relay a backend reply with its own status and body.
pub fn relay_response(reply: BackendReply) -> Response {
    (status_code(reply.status, StatusCode::OK), Json(reply.body)).into_response()
}

/// Either the relayed reply or the `{success: false, error}` envelope.
pub fn proxy_response(result: Result<BackendReply, ProxyError>) -> Response {
    match result {
        Ok(reply) => relay_response(reply),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if let ProxyError::Internal(cause) = &self {
            tracing::debug!("Proxy failure detail: {}", cause);
        }
        let status = status_code(self.status(), StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.envelope())).into_response()
    }
}

pub fn html_response(status: StatusCode, markup: String) -> Response {
    (status, Html(markup)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_relay_keeps_status_and_body() {
        let response = relay_response(BackendReply::new(201, json!({"success": true})));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"success": true}));
    }

    #[tokio::test]
    async fn test_backend_error_envelope() {
        let response = proxy_response(Err(ProxyError::Backend {
            status: 404,
            message: "File not found".to_string(),
        }));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "File not found"})
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response = ProxyError::Internal("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": "Internal server error"})
        );
    }
}
