use crate::models::{BrowsingAction, BrowsingEvent, College, UserPreferences};

/// Sub-score used when the user expressed no preference for a factor
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Average package treated as a perfect package score
pub const PACKAGE_CEILING: f64 = 5_000_000.0;

/// View duration (seconds) that earns the full view credit
const FULL_VIEW_SECS: f64 = 300.0;
const MAX_VIEW_CREDIT: f64 = 0.1;
const FAVORITE_CREDIT: f64 = 0.3;
const COMPARE_CREDIT: f64 = 0.2;

const STATE_MATCH_CREDIT: f64 = 0.7;
const CITY_MATCH_CREDIT: f64 = 0.3;

/// Case-insensitive "needle appears inside haystack"
#[inline]
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if any candidate string appears inside the target
#[inline]
fn any_contained_in(candidates: &[String], target: &str) -> bool {
    let target = target.to_lowercase();
    candidates
        .iter()
        .any(|candidate| target.contains(&candidate.to_lowercase()))
}

/// Fraction of preferred courses offered by the college (0-1)
///
/// A preferred course counts as offered when its text appears inside any
/// of the college's course names, ignoring case. The reverse direction is
/// not tested: "CS" does not match "Computer Science".
pub fn course_match(college: &College, preferences: &UserPreferences) -> f64 {
    if preferences.preferred_courses.is_empty() {
        return NEUTRAL_SCORE;
    }

    if college.courses_offered.is_empty() {
        return 0.0;
    }

    let offered: Vec<String> = college
        .courses_offered
        .iter()
        .map(|course| course.to_lowercase())
        .collect();

    let matched = preferences
        .preferred_courses
        .iter()
        .map(|preferred| preferred.to_lowercase())
        .filter(|preferred| offered.iter().any(|course| course.contains(preferred.as_str())))
        .count();

    (matched as f64 / preferences.preferred_courses.len() as f64).min(1.0)
}

/// Location score (0-1): 0.7 for a state hit plus 0.3 for a city hit
pub fn location_match(college: &College, preferences: &UserPreferences) -> f64 {
    if preferences.preferred_states.is_empty() && preferences.preferred_cities.is_empty() {
        return NEUTRAL_SCORE;
    }

    let mut score = 0.0;

    if any_contained_in(&preferences.preferred_states, &college.state) {
        score += STATE_MATCH_CREDIT;
    }

    if any_contained_in(&preferences.preferred_cities, &college.city) {
        score += CITY_MATCH_CREDIT;
    }

    f64::min(score, 1.0)
}

/// Budget score (0-1)
///
/// Inside the range scores 1.0, under the minimum 0.8. Over the maximum the
/// score decays linearly with the overage relative to the maximum itself and
/// hits 0 once the fee is double the maximum.
pub fn budget_match(college: &College, preferences: &UserPreferences) -> f64 {
    let fee = college.annual_fees;
    if fee == 0.0 {
        return NEUTRAL_SCORE;
    }

    let min = preferences.budget_range.min;
    let max = preferences.budget_range.max_or_unbounded();

    if fee >= min && fee <= max {
        1.0
    } else if fee < min {
        0.8
    } else if max <= 0.0 {
        // A non-positive cap gives no scale for the overage
        NEUTRAL_SCORE
    } else {
        let overage_ratio = (fee - max) / max;
        (1.0 - overage_ratio).max(0.0)
    }
}

/// Rating score (0-1)
///
/// Meeting the floor earns 0.8 plus up to 0.2 for the margin above it.
/// Falling short is penalized by the shortfall relative to the floor.
pub fn rating_match(college: &College, preferences: &UserPreferences) -> f64 {
    let min_rating = preferences.min_rating;
    if min_rating <= 0.0 {
        return NEUTRAL_SCORE;
    }

    let rating = college.star_rating;

    if rating >= min_rating {
        let bonus = if min_rating < 5.0 {
            (rating - min_rating) / (5.0 - min_rating)
        } else {
            0.0
        };
        (0.8 + bonus * 0.2).min(1.0)
    } else {
        let penalty = (min_rating - rating) / min_rating;
        (1.0 - penalty).max(0.0)
    }
}

/// Placement score (0-1), scaled by how much the user cares
pub fn placement_match(college: &College, preferences: &UserPreferences) -> f64 {
    let priority = preferences.placement_priority;
    if priority <= 2 {
        return NEUTRAL_SCORE;
    }

    let placement_score = (college.placement_percentage / 100.0).max(0.0);
    let package_score = if college.average_package > 0.0 {
        (college.average_package / PACKAGE_CEILING).min(1.0)
    } else {
        0.0
    };

    // Priority 3..=5 maps to 1/3..=1
    let priority_weight = (f64::from(priority.min(5)) - 2.0) / 3.0;

    (placement_score * 0.6 + package_score * 0.4) * priority_weight
}

/// Browsing signal (0-1) from a college's recent history events
///
/// Favorites earn 0.3, comparisons 0.2, and views up to 0.1 scaled by
/// duration. Searches and unknown actions earn nothing.
pub fn browsing_history_match(recent_events: &[&BrowsingEvent]) -> f64 {
    let score: f64 = recent_events
        .iter()
        .map(|event| match event.action {
            BrowsingAction::Favorite => FAVORITE_CREDIT,
            BrowsingAction::Compare => COMPARE_CREDIT,
            BrowsingAction::View => (event.duration / FULL_VIEW_SECS).clamp(0.0, MAX_VIEW_CREDIT),
            BrowsingAction::Search | BrowsingAction::Other => 0.0,
        })
        .sum();

    score.min(1.0)
}
