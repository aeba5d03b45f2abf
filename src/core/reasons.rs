use crate::core::factors::contains_ci;
use crate::models::{College, UserPreferences};

/// Upper bound on reasons attached to a college
pub const MAX_MATCH_REASONS: usize = 3;

/// Course names listed in the "Offers ..." reason
const MAX_LISTED_COURSES: usize = 2;

const HIGH_RATING: f64 = 4.0;
const EXCELLENT_PLACEMENT_PCT: f64 = 80.0;
const PLACEMENT_REASON_PRIORITY: u8 = 4;

/// Human-readable reasons a college fits the user's preferences
///
/// Checked in a fixed order (courses, state, budget, rating, placements)
/// and cut to the first three that apply. Independent of the score.
pub fn match_reasons(college: &College, preferences: &UserPreferences) -> Vec<String> {
    let mut reasons = Vec::with_capacity(MAX_MATCH_REASONS);

    let courses = matched_courses(college, preferences);
    if !courses.is_empty() {
        let listed: Vec<&str> = courses.into_iter().take(MAX_LISTED_COURSES).collect();
        reasons.push(format!("Offers {}", listed.join(", ")));
    }

    if preferences
        .preferred_states
        .iter()
        .any(|state| contains_ci(&college.state, state))
    {
        reasons.push(format!("Located in {}", college.state));
    }

    if college.annual_fees <= preferences.budget_range.max_or_unbounded() {
        reasons.push("Within your budget".to_string());
    }

    let rating = college.star_rating;
    if rating >= preferences.min_rating && rating >= HIGH_RATING {
        reasons.push(format!("High rated ({:.1}★)", rating));
    }

    if preferences.placement_priority >= PLACEMENT_REASON_PRIORITY
        && college.placement_percentage >= EXCELLENT_PLACEMENT_PCT
    {
        reasons.push(format!("Excellent placements ({:?}%)", college.placement_percentage));
    }

    reasons.truncate(MAX_MATCH_REASONS);
    reasons
}

/// College course names hit by a preferred course, as spelled on the record
///
/// For each preferred course the first offered course containing it is
/// taken, one entry per preference, so a course hit twice appears twice.
fn matched_courses<'a>(college: &'a College, preferences: &UserPreferences) -> Vec<&'a str> {
    preferences
        .preferred_courses
        .iter()
        .filter_map(|preferred| {
            college
                .courses_offered
                .iter()
                .find(|course| contains_ci(course, preferred))
                .map(String::as_str)
        })
        .collect()
}
