use crate::models::{College, UserPreferences, FactorScores, ScoringWeights};
use crate::core::{
    factors::{budget_match, browsing_history_match, course_match, location_match, placement_match, rating_match},
    history::RecentActivity,
};

/// Calculate a recommendation score (0-1) for a college
///
/// Scoring formula:
/// score = min(1, (
///     course_match * 0.25 +        # Preferred courses offered
///     location_match * 0.20 +      # Preferred state / city
///     budget_match * 0.20 +        # Fee against budget range
///     rating_match * 0.15 +        # Star rating against floor
///     placement_match * 0.10 +     # Placements, scaled by priority
///     browsing_history * 0.10      # Recent favorites, compares, views
/// ))
///
/// Returns the clamped score and the per-factor breakdown.
pub fn calculate_recommendation_score(
    college: &College,
    preferences: &UserPreferences,
    activity: &RecentActivity<'_>,
    weights: &ScoringWeights,
) -> (f64, FactorScores) {
    let factors = FactorScores {
        course: course_match(college, preferences),
        location: location_match(college, preferences),
        budget: budget_match(college, preferences),
        rating: rating_match(college, preferences),
        placement: placement_match(college, preferences),
        browsing_history: browsing_history_match(activity.events_for(&college.id)),
    };

    let total_score = factors.weighted(weights);

    (total_score.clamp(0.0, 1.0), factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrowsingAction, BrowsingEvent, BudgetRange};
    use chrono::{Duration, Utc};

    fn create_test_college(id: &str, annual_fees: f64, star_rating: f64) -> College {
        College {
            id: id.to_string(),
            name: format!("College {}", id),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            annual_fees,
            star_rating,
            courses_offered: vec!["B.Tech Computer Science".to_string()],
            placement_percentage: 85.0,
            average_package: 1_000_000.0,
            ..College::default()
        }
    }

    fn create_test_preferences() -> UserPreferences {
        UserPreferences {
            preferred_courses: vec!["computer".to_string()],
            preferred_states: vec!["maharashtra".to_string()],
            preferred_cities: vec!["pune".to_string()],
            budget_range: BudgetRange::new(100_000.0, 300_000.0),
            min_rating: 4.0,
            placement_priority: 5,
        }
    }

    #[test]
    fn test_calculate_recommendation_score() {
        let college = create_test_college("c1", 200_000.0, 4.5);
        let preferences = create_test_preferences();
        let weights = ScoringWeights::default();
        let activity = RecentActivity::default();

        let (score, factors) = calculate_recommendation_score(&college, &preferences, &activity, &weights);

        assert!((0.0..=1.0).contains(&score));
        assert_eq!(factors.course, 1.0);
        assert_eq!(factors.budget, 1.0);
        assert_eq!(factors.browsing_history, 0.0);
        assert!((score - factors.weighted(&weights)).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_college_scores_at_most_one() {
        let mut college = create_test_college("c1", 200_000.0, 5.0);
        college.placement_percentage = 100.0;
        college.average_package = 9_000_000.0;
        let preferences = create_test_preferences();

        let now = Utc::now();
        let history: Vec<BrowsingEvent> = (0..10)
            .map(|_| BrowsingEvent {
                college_id: Some("c1".to_string()),
                action: BrowsingAction::Favorite,
                timestamp: now.timestamp_millis(),
                duration: 0.0,
            })
            .collect();
        let activity = RecentActivity::collect(Some(&history), now, Duration::days(7));

        let (score, factors) = calculate_recommendation_score(&college, &preferences, &activity, &ScoringWeights::default());

        assert_eq!(factors.browsing_history, 1.0);
        assert!(score <= 1.0);
        assert!(score > 0.99);
    }

    #[test]
    fn test_within_budget_scores_higher() {
        let affordable = create_test_college("c1", 200_000.0, 4.5);
        let expensive = create_test_college("c2", 550_000.0, 4.5);
        let preferences = create_test_preferences();
        let weights = ScoringWeights::default();
        let activity = RecentActivity::default();

        let (affordable_score, _) = calculate_recommendation_score(&affordable, &preferences, &activity, &weights);
        let (expensive_score, _) = calculate_recommendation_score(&expensive, &preferences, &activity, &weights);

        assert!(
            affordable_score > expensive_score,
            "Colleges within budget should score higher"
        );
    }
}
