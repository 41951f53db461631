// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::proxy_service::ProxyService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_backend::HttpAnalysisBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create backend adapter (infrastructure layer)
    let backend = Arc::new(HttpAnalysisBackend::new(
        app_config.backend_url.clone(),
        reqwest::Client::new(),
    ));

    // Create services (application layer)
    let proxy_service = Arc::new(ProxyService::new(backend));

    // Create application state
    let state = Arc::new(AppState { proxy_service });

    // Build router (presentation layer)
    let router = build_router(state, app_config.max_upload_bytes);

    // Start server
    let addr: SocketAddr = app_config
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", app_config.bind_addr))?;
    tracing::info!(
        "Starting csv-insight-dashboard on {} (backend {})",
        addr,
        app_config.backend_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
