use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Matches the backend's own upload limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: i64 = 10 * 1024 * 1024;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Origin of the analysis backend, without a trailing slash.
    pub backend_url: String,
    pub bind_addr: String,
    pub max_upload_bytes: usize,
}

/// Load configuration from `config/dashboard.toml` (optional) and the
/// environment (`BACKEND_URL`, `BIND_ADDR`, `MAX_UPLOAD_BYTES`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::default().try_parsing(true));

    build_app_config(builder)
}

pub fn build_app_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let settings = builder
        .set_default("backend_url", DEFAULT_BACKEND_URL)?
        .set_default("bind_addr", DEFAULT_BIND_ADDR)?
        .set_default("max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;
    app_config.backend_url = app_config.backend_url.trim_end_matches('/').to_string();
    Ok(app_config)
}
