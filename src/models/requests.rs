use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{BrowsingEvent, College, UserPreferences};

/// Request to rank a candidate set against user preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub colleges: Vec<College>,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(rename = "browsingHistory", alias = "browsing_history", default)]
    pub browsing_history: Option<Vec<BrowsingEvent>>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request for the trending view
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrendingRequest {
    #[serde(default)]
    pub colleges: Vec<College>,
    #[serde(rename = "browsingHistory", alias = "browsing_history", default)]
    pub browsing_history: Option<Vec<BrowsingEvent>>,
}
