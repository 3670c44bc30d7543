use serde::Serialize;
use crate::models::domain::MatchResults;

/// Response for the calculate matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CalculateMatchesResponse<'a> {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    pub results: MatchResults<'a>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
