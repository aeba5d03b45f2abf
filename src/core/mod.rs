// Core algorithm exports
pub mod engine;
pub mod factors;
pub mod history;
pub mod reasons;
pub mod scoring;

pub use engine::{ScoringEngine, EngineSettings, DEFAULT_TRENDING_LIMIT};
pub use factors::{course_match, location_match, budget_match, rating_match, placement_match, browsing_history_match, NEUTRAL_SCORE};
pub use history::{RecentActivity, DEFAULT_HISTORY_WINDOW_DAYS};
pub use reasons::{match_reasons, MAX_MATCH_REASONS};
pub use scoring::calculate_recommendation_score;
