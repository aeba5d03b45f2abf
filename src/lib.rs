//! Campus Rank - preference-weighted college recommendation service
//!
//! This library provides the scoring engine that ranks colleges against a
//! user's preferences and recent browsing history, plus the trending view.
//! The engine is a pure computation over an in-memory candidate set.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{ScoringEngine, EngineSettings};
pub use crate::models::{College, UserPreferences, BrowsingEvent, BrowsingAction, ScoredCollege, TrendingCollege, ScoringWeights};
