use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RecommendationSettings;
use crate::core::ScoringEngine;
use crate::error::ApiError;
use crate::models::{RecommendationsRequest, TrendingRequest, RecommendationsResponse, TrendingResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: ScoringEngine,
    pub limits: RecommendationSettings,
}

impl AppState {
    pub fn new(engine: ScoringEngine, limits: RecommendationSettings) -> Self {
        Self { engine, limits }
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/trending", web::post().to(trending));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "colleges": [{ "id": "string", "annual_fees": 150000, ... }],
///   "preferences": { "preferredCourses": ["string"], "budgetRange": { "min": 0, "max": 300000 } },
///   "browsingHistory": [{ "collegeId": "string", "action": "view", "timestamp": 0, "duration": 120 }],
///   "limit": 20
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let limit = req
        .limit
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit) as usize;

    tracing::info!(
        "Ranking {} colleges against preferences, limit: {}",
        req.colleges.len(),
        limit
    );

    let mut recommendations = state.engine.calculate_recommendations(
        &req.colleges,
        &req.preferences,
        req.browsing_history.as_deref(),
    );

    let total_results = recommendations.len();
    recommendations.truncate(limit);

    tracing::info!(
        "Returning {} recommendations (from {} candidates)",
        recommendations.len(),
        total_results
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        total_results,
    }))
}

/// Trending endpoint
///
/// POST /api/v1/trending
///
/// Request body:
/// ```json
/// {
///   "colleges": [{ "id": "string", "star_rating": 4.5, ... }],
///   "browsingHistory": [{ "collegeId": "string", "action": "favorite", "timestamp": 0 }]
/// }
/// ```
async fn trending(
    state: web::Data<AppState>,
    req: web::Json<TrendingRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    let colleges = state
        .engine
        .trending(&req.colleges, req.browsing_history.as_deref());

    tracing::info!(
        "Returning {} trending colleges (from {} candidates)",
        colleges.len(),
        req.colleges.len()
    );

    Ok(HttpResponse::Ok().json(TrendingResponse { colleges }))
}
