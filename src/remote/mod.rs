//! Clients for the two advisory services the dashboard consumes.
//!
//! Both are strictly read-only with respect to core state: they take a
//! snapshot of the current [`crate::domain::AppState`] and return independent
//! results. A failed or slow request surfaces as
//! [`crate::errors::DashboardError::Remote`] and never touches local data.

pub mod analysis;
pub mod spreadsheet;

pub use analysis::{AnalysisClient, AnalysisReport};
pub use spreadsheet::SpreadsheetClient;

fn service_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
