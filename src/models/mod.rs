// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{College, UserPreferences, BudgetRange, BrowsingEvent, BrowsingAction, ScoredCollege, TrendingCollege, FactorScores, ScoringWeights};
pub use requests::{RecommendationsRequest, TrendingRequest};
pub use responses::{RecommendationsResponse, TrendingResponse, HealthResponse, ErrorResponse};
