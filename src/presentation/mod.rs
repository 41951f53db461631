// Presentation layer - HTTP routes and server-rendered views
pub mod app_state;
pub mod chart_options;
pub mod handlers;
pub mod insight_view;
pub mod page;
pub mod router;
pub mod uploader_view;
