use crate::core::Matcher;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::services::CatalogStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/neighborhoods", web::get().to(list_neighborhoods));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "priorities": ["Safety & Low Crime"],
///     "budget": "$1,500 - $2,500/month",
///     "lifestyle": "Suburban Family - Prefer quiet communities",
///     "familyStatus": "Young family with children",
///     "interests": ["Outdoor Activities"]
///   },
///   "limit": 20,
///   "minScore": 0
/// }
/// ```
///
/// Unknown preference labels are accepted and scored with the documented
/// flat defaults; they never fail the request.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit.min(state.max_limit) as usize;

    if req.preferences.is_empty() {
        tracing::debug!("Empty questionnaire received, every score will be 0");
    }

    tracing::info!(
        "Ranking catalog: priorities={}, interests={}, limit={}",
        req.preferences.priorities.len(),
        req.preferences.interests.len(),
        limit
    );

    let result = state.matcher.rank(
        &req.preferences,
        state.catalog.neighborhoods(),
        limit,
        req.min_score,
    );

    let response = FindMatchesResponse {
        total_candidates: result.total_candidates,
        matches: result.matches,
    };

    tracing::info!(
        "Returning {} matches (from {} catalog records)",
        response.matches.len(),
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// List the full neighborhood catalog
///
/// GET /api/v1/neighborhoods
///
/// Used by the questionnaire UI to render the catalog before any scoring
/// has happened.
async fn list_neighborhoods(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.neighborhoods())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            catalog_size: 12,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
        assert_eq!(response.catalog_size, 12);
    }
}
