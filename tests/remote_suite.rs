use findash_core::{
    domain::AppState,
    errors::DashboardError,
    remote::{AnalysisClient, SpreadsheetClient},
};

// Port 1 is reserved and never listening, so both clients should fail fast
// with a transport error, mapped to the remote variant and leaving no trace
// in local state.

#[tokio::test]
async fn unreachable_analysis_service_surfaces_a_remote_error() {
    let client = AnalysisClient::new("http://127.0.0.1:1");
    let err = client.analyze(&AppState::default()).await.unwrap_err();
    assert!(matches!(err, DashboardError::Remote(_)));
}

#[tokio::test]
async fn unreachable_spreadsheet_service_surfaces_a_remote_error() {
    let client = SpreadsheetClient::new("http://127.0.0.1:1/");
    let err = client.generate(&AppState::default()).await.unwrap_err();
    assert!(matches!(err, DashboardError::Remote(_)));
}
