use thiserror::Error;

/// Error type that captures the failure modes of the dashboard core.
///
/// Every local variant is raised synchronously by the mutator or service call
/// that detected it, always before any state is touched. `Remote` only comes
/// out of the [`crate::remote`] clients and never corrupts local state.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Malformed backup document: {0}")]
    Parse(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Remote service error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Remote(err.to_string())
    }
}
