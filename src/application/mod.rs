// Application layer - Use cases: proxying to the backend and driving the dashboard
pub mod analysis_backend;
pub mod dashboard_service;
pub mod proxy_service;
pub mod sample_data;
