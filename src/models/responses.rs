use crate::models::domain::ScoredNeighborhood;
use serde::{Deserialize, Serialize};

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredNeighborhood>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
