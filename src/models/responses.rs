use serde::{Deserialize, Serialize};
use crate::models::domain::{ScoredCollege, TrendingCollege};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredCollege>,
    pub total_results: usize,
}

/// Response for the trending endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub colleges: Vec<TrendingCollege>,
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
