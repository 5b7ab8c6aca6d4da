//! Client for the spreadsheet-generation service.

use reqwest::Client;
use serde::Serialize;

use crate::{
    domain::{AppState, Goal, Task, Transaction},
    errors::{DashboardError, Result},
};

use super::service_url;

#[derive(Debug, Serialize)]
struct ReportRequest<'a> {
    transactions: &'a [Transaction],
    goals: &'a [Goal],
    tasks: &'a [Task],
    salary: f64,
}

pub struct SpreadsheetClient {
    base_url: String,
    client: Client,
}

impl SpreadsheetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Asks the service to render the snapshot as a spreadsheet and returns
    /// the binary payload for download.
    pub async fn generate(&self, state: &AppState) -> Result<Vec<u8>> {
        let request = ReportRequest {
            transactions: &state.transactions,
            goals: &state.goals,
            tasks: &state.tasks,
            salary: state.salary,
        };
        let response = self
            .client
            .post(service_url(&self.base_url, "generate_excel"))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::Remote(format!(
                "spreadsheet service returned {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
