pub mod capacity_store;
pub mod completion_estimate;
pub mod config;
pub mod dashboard_json;
pub mod dashboard_report;
pub mod date_format;
pub mod holiday_yaml;
pub mod progress_plot;
