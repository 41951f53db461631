// Domain layer - Data transferred between the browser, this service and the backend
pub mod analysis;
pub mod chart;
pub mod dataset;
pub mod insight;
