// Application state for HTTP handlers
use crate::application::proxy_service::ProxyService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub proxy_service: Arc<ProxyService>,
}
