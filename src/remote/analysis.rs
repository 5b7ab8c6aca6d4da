//! Client for the financial-analysis service.
//!
//! The service's response shape varies between deployments, so each report
//! field is resolved through an explicit ordered list of candidate keys; the
//! lists below are the documented contract. Anything still missing falls back
//! to placeholder text or an empty series.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{
    domain::{AppState, Goal, Transaction},
    errors::{DashboardError, Result},
};

use super::service_url;

const SUMMARY_KEYS: [&str; 3] = ["resumo", "summary", "a"];
const RECOMMENDATION_KEYS: [&str; 3] = ["recomendacao", "recommendation", "b"];
const SERIES_KEYS: [&str; 3] = ["grafico", "chart_data", "c"];

const SUMMARY_FALLBACK: &str = "No summary available.";
const RECOMMENDATION_FALLBACK: &str = "No recommendation.";

#[derive(Debug, Serialize)]
struct AnalysisRequest<'a> {
    salary: f64,
    transactions: &'a [Transaction],
    goals: &'a [Goal],
}

/// Advisory output: a health summary, a savings recommendation, and a
/// balance-projection series for the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub summary: String,
    pub recommendation: String,
    pub projection: Vec<f64>,
}

pub struct AnalysisClient {
    base_url: String,
    client: Client,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Sends the snapshot out for analysis and maps the response leniently.
    pub async fn analyze(&self, state: &AppState) -> Result<AnalysisReport> {
        let request = AnalysisRequest {
            salary: state.salary,
            transactions: &state.transactions,
            goals: &state.goals,
        };
        let response = self
            .client
            .post(service_url(&self.base_url, "analyze"))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::Remote(format!(
                "analysis service returned {}",
                response.status()
            )));
        }
        let body: Value = response.json().await?;
        Ok(parse_report(&body))
    }
}

/// Maps a raw response body onto a report, trying each candidate key in
/// order and falling back when none is present.
pub fn parse_report(body: &Value) -> AnalysisReport {
    AnalysisReport {
        summary: first_string(body, &SUMMARY_KEYS)
            .unwrap_or_else(|| SUMMARY_FALLBACK.to_string()),
        recommendation: first_string(body, &RECOMMENDATION_KEYS)
            .unwrap_or_else(|| RECOMMENDATION_FALLBACK.to_string()),
        projection: first_series(body, &SERIES_KEYS),
    }
}

fn first_string(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn first_series(body: &Value, keys: &[&str]) -> Vec<f64> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(Value::as_array))
        .map(|items| items.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn portuguese_keys_are_preferred() {
        let report = parse_report(&json!({
            "resumo": "saudavel",
            "recomendacao": "economize",
            "grafico": [100.0, 200.0],
            "summary": "ignored"
        }));
        assert_eq!(report.summary, "saudavel");
        assert_eq!(report.recommendation, "economize");
        assert_eq!(report.projection, vec![100.0, 200.0]);
    }

    #[test]
    fn english_and_short_keys_are_accepted() {
        let report = parse_report(&json!({
            "summary": "healthy",
            "b": "save more",
            "chart_data": [1, 2, 3]
        }));
        assert_eq!(report.summary, "healthy");
        assert_eq!(report.recommendation, "save more");
        assert_eq!(report.projection, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let report = parse_report(&json!({}));
        assert_eq!(report.summary, SUMMARY_FALLBACK);
        assert_eq!(report.recommendation, RECOMMENDATION_FALLBACK);
        assert!(report.projection.is_empty());
    }

    #[test]
    fn non_numeric_series_entries_are_skipped() {
        let report = parse_report(&json!({ "c": [10.0, "n/a", 30.0, null] }));
        assert_eq!(report.projection, vec![10.0, 30.0]);
    }
}
