use serde::{Deserialize, Deserializer, Serialize};

/// College record as held by the document store
///
/// Only the fields the scoring engine reads are typed. Every other store
/// field (logo, accreditation, contact details, ...) is carried through
/// untouched in `extra` so annotated results echo the full record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct College {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    /// Annual fee in currency units, 0 when unknown
    #[serde(rename = "annual_fees", default)]
    pub annual_fees: f64,
    /// Star rating in 0-5
    #[serde(rename = "star_rating", default)]
    pub star_rating: f64,
    #[serde(rename = "courses_offered", default)]
    pub courses_offered: Vec<String>,
    /// Placement percentage in 0-100
    #[serde(rename = "placement_percentage", default)]
    pub placement_percentage: f64,
    #[serde(rename = "average_package", default)]
    pub average_package: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Fee bounds the user is willing to pay
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: f64,
    /// `None` means no upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    /// Upper bound, `f64::INFINITY` when unset
    #[inline]
    pub fn max_or_unbounded(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }
}

/// User preferences driving the recommendation score
///
/// Every field is optional on the wire. Missing or `null` values fall back
/// to "unset", which the engine scores as neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(rename = "preferredCourses", default, deserialize_with = "null_as_default")]
    pub preferred_courses: Vec<String>,
    #[serde(rename = "preferredStates", default, deserialize_with = "null_as_default")]
    pub preferred_states: Vec<String>,
    #[serde(rename = "preferredCities", default, deserialize_with = "null_as_default")]
    pub preferred_cities: Vec<String>,
    #[serde(rename = "budgetRange", default, deserialize_with = "null_as_default")]
    pub budget_range: BudgetRange,
    /// Rating floor in 0-5, 0 meaning unset
    #[serde(rename = "minRating", default, deserialize_with = "null_as_default")]
    pub min_rating: f64,
    /// 1-5, placement scoring only engages above 2
    #[serde(
        rename = "placementPriority",
        default = "default_placement_priority",
        deserialize_with = "null_as_placement_priority"
    )]
    pub placement_priority: u8,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_courses: vec![],
            preferred_states: vec![],
            preferred_cities: vec![],
            budget_range: BudgetRange::default(),
            min_rating: 0.0,
            placement_priority: default_placement_priority(),
        }
    }
}

fn default_placement_priority() -> u8 { 3 }

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_placement_priority<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u8>::deserialize(deserializer)?.unwrap_or_else(default_placement_priority))
}

/// Kind of interaction recorded in browsing history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowsingAction {
    View,
    Favorite,
    Compare,
    Search,
    #[default]
    #[serde(other)]
    Other,
}

/// A single timestamped browsing history entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowsingEvent {
    #[serde(rename = "collegeId", default)]
    pub college_id: Option<String>,
    #[serde(default)]
    pub action: BrowsingAction,
    /// Epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
    /// Seconds spent, only meaningful for views
    #[serde(default)]
    pub duration: f64,
}

/// College annotated with its recommendation score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCollege {
    #[serde(flatten)]
    pub college: College,
    pub recommendation_score: f64,
    pub match_reasons: Vec<String>,
}

/// College annotated with its trend score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingCollege {
    #[serde(flatten)]
    pub college: College,
    pub trend_score: f64,
}

/// Per-factor sub-scores for a single college, each roughly in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FactorScores {
    pub course: f64,
    pub location: f64,
    pub budget: f64,
    pub rating: f64,
    pub placement: f64,
    pub browsing_history: f64,
}

impl FactorScores {
    /// Weighted sum of the sub-scores, not yet clamped
    pub fn weighted(&self, weights: &ScoringWeights) -> f64 {
        self.course * weights.course
            + self.location * weights.location
            + self.budget * weights.budget
            + self.rating * weights.rating
            + self.placement * weights.placement
            + self.browsing_history * weights.browsing_history
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub course: f64,
    pub location: f64,
    pub budget: f64,
    pub rating: f64,
    pub placement: f64,
    pub browsing_history: f64,
}

impl ScoringWeights {
    /// Check the weight table at startup
    ///
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let named = [
            ("course", self.course),
            ("location", self.location),
            ("budget", self.budget),
            ("rating", self.rating),
            ("placement", self.placement),
            ("browsing_history", self.browsing_history),
        ];

        let mut errors = Vec::new();
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("scoring.weights.{}: must be a non-negative number, got {}", name, value));
            }
        }

        let total: f64 = named.iter().map(|(_, value)| value).sum();
        if (total - 1.0).abs() > 1e-6 {
            errors.push(format!("scoring.weights: must sum to 1.0, got {}", total));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            course: 0.25,
            location: 0.20,
            budget: 0.20,
            rating: 0.15,
            placement: 0.10,
            browsing_history: 0.10,
        }
    }
}
