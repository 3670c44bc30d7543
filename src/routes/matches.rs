use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{calculate_matches, retain_eligible};
use crate::models::{CalculateMatchesRequest, CalculateMatchesResponse, ErrorResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_candidates: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/calculate", web::post().to(calculate));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Calculate matches endpoint
///
/// POST /api/v1/matches/calculate
///
/// Request body:
/// ```json
/// {
///   "user": { "userId": "string", "interests": [], "personalityTags": [], "dimensions": [] },
///   "candidates": [ ... ],
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn calculate(
    state: web::Data<AppState>,
    req: web::Json<CalculateMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for calculate request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if req.candidates.len() > state.max_candidates {
        tracing::warn!(
            "Rejecting {} candidates for user {} (max {})",
            req.candidates.len(),
            req.user.user_id,
            state.max_candidates
        );
        return HttpResponse::PayloadTooLarge().json(ErrorResponse {
            error: "Too many candidates".to_string(),
            message: format!(
                "At most {} candidates may be ranked per request",
                state.max_candidates
            ),
            status_code: 413,
        });
    }

    let CalculateMatchesRequest {
        user,
        mut candidates,
        exclude_user_ids,
    } = req.into_inner();

    retain_eligible(&mut candidates, &user.user_id, &exclude_user_ids);

    tracing::debug!(
        "Ranking {} candidates for user {} ({} excluded)",
        candidates.len(),
        user.user_id,
        exclude_user_ids.len()
    );

    let results = match calculate_matches(&user, &candidates) {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("Rejected matching input for {}: {}", user.user_id, e);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Invalid personality data".to_string(),
                message: e.to_string(),
                status_code: 422,
            });
        }
    };

    let response = CalculateMatchesResponse {
        request_id: uuid::Uuid::new_v4(),
        total_candidates: results.len(),
        results,
    };

    tracing::info!(
        "Returning {} ranked candidates for user {} (request {})",
        response.total_candidates,
        user.user_id,
        response.request_id
    );

    HttpResponse::Ok().json(response)
}
