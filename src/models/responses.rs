use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchDirection, MatchRecord, MatchResult};

/// Response for both ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    #[serde(rename = "anchorId")]
    pub anchor_id: i64,
    pub direction: MatchDirection,
    pub matches: Vec<MatchResult>,
    pub total_results: usize,
}

/// Response for the match history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistoryResponse {
    pub matches: Vec<MatchRecord>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
