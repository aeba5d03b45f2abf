use chrono::{DateTime, Duration, Utc};

use crate::models::{BrowsingEvent, College, ScoredCollege, ScoringWeights, TrendingCollege, UserPreferences};
use crate::core::{
    history::{RecentActivity, DEFAULT_HISTORY_WINDOW_DAYS},
    reasons::match_reasons,
    scoring::calculate_recommendation_score,
};

/// Default size of the trending list
pub const DEFAULT_TRENDING_LIMIT: usize = 10;

const TREND_INTERACTION_WEIGHT: f64 = 0.7;
const TREND_RATING_WEIGHT: f64 = 0.3;

/// Immutable engine configuration, built once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub weights: ScoringWeights,
    /// Trailing window within which history counts as recent
    pub history_window: Duration,
    pub trending_limit: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            history_window: Duration::days(i64::from(DEFAULT_HISTORY_WINDOW_DAYS)),
            trending_limit: DEFAULT_TRENDING_LIMIT,
        }
    }
}

/// Recommendation and trending ranking over an in-memory candidate set
///
/// Every call is a pure function of its inputs and the reference clock. The
/// engine holds no per-call state and can be shared freely across workers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    settings: EngineSettings,
}

impl ScoringEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn with_default_settings() -> Self {
        Self {
            settings: EngineSettings::default(),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Rank colleges against the user's preferences and recent history
    ///
    /// # Arguments
    /// * `colleges` - Candidate set, already fetched by the caller
    /// * `preferences` - The user's preferences, unset fields score neutral
    /// * `browsing_history` - Optional history, only the trailing window counts
    ///
    /// # Returns
    /// Every college annotated with score and reasons, best first. Ties keep
    /// their input order.
    pub fn calculate_recommendations(
        &self,
        colleges: &[College],
        preferences: &UserPreferences,
        browsing_history: Option<&[BrowsingEvent]>,
    ) -> Vec<ScoredCollege> {
        self.calculate_recommendations_at(colleges, preferences, browsing_history, Utc::now())
    }

    /// Same as [`Self::calculate_recommendations`] with an explicit clock
    pub fn calculate_recommendations_at(
        &self,
        colleges: &[College],
        preferences: &UserPreferences,
        browsing_history: Option<&[BrowsingEvent]>,
        now: DateTime<Utc>,
    ) -> Vec<ScoredCollege> {
        if colleges.is_empty() {
            return vec![];
        }

        let activity = RecentActivity::collect(browsing_history, now, self.settings.history_window);

        let mut scored: Vec<ScoredCollege> = colleges
            .iter()
            .map(|college| {
                let (score, factors) = calculate_recommendation_score(
                    college,
                    preferences,
                    &activity,
                    &self.settings.weights,
                );

                tracing::trace!("College {} scored {:.4} ({:?})", college.id, score, factors);

                ScoredCollege {
                    college: college.clone(),
                    recommendation_score: score,
                    match_reasons: match_reasons(college, preferences),
                }
            })
            .collect();

        // Stable sort keeps input order among equal scores
        scored.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));

        tracing::debug!(
            "Scored {} colleges ({} with recent activity)",
            scored.len(),
            activity.active_colleges()
        );

        scored
    }

    /// Top colleges by recent interaction volume blended with rating
    ///
    /// trend_score = interactions * 0.7 + star_rating * 0.3
    ///
    /// Without history every college has zero interactions, so the list
    /// falls back to star rating order.
    pub fn trending(
        &self,
        colleges: &[College],
        browsing_history: Option<&[BrowsingEvent]>,
    ) -> Vec<TrendingCollege> {
        self.trending_at(colleges, browsing_history, Utc::now())
    }

    /// Same as [`Self::trending`] with an explicit clock
    pub fn trending_at(
        &self,
        colleges: &[College],
        browsing_history: Option<&[BrowsingEvent]>,
        now: DateTime<Utc>,
    ) -> Vec<TrendingCollege> {
        let activity = RecentActivity::collect(browsing_history, now, self.settings.history_window);

        if !activity.has_history() {
            tracing::debug!("No browsing history, ranking trending colleges by rating");
        }

        let mut trending: Vec<TrendingCollege> = colleges
            .iter()
            .map(|college| {
                let interactions = activity.interactions(&college.id) as f64;

                TrendingCollege {
                    college: college.clone(),
                    trend_score: interactions * TREND_INTERACTION_WEIGHT
                        + college.star_rating * TREND_RATING_WEIGHT,
                }
            })
            .collect();

        trending.sort_by(|a, b| b.trend_score.total_cmp(&a.trend_score));
        trending.truncate(self.settings.trending_limit);

        trending
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::with_default_settings()
    }
}
