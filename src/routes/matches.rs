use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{MatchEngine, MatchError};
use crate::models::{
    ErrorResponse, HealthResponse, HistoryQuery, MatchDirection, MatchHistoryResponse,
    MatchListResponse, MatchQuery,
};
use crate::services::MatchStore;

/// Application state shared across all handlers
pub struct AppState<S> {
    pub engine: MatchEngine<S>,
    pub matching: MatchingSettings,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            matching: self.matching.clone(),
        }
    }
}

/// Configure all match-related routes
pub fn configure<S: MatchStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check::<S>))
        .route("/jobs/{job_id}/matches", web::get().to(job_matches::<S>))
        .route("/workers/{worker_id}/matches", web::get().to(worker_matches::<S>))
        .route("/matches/history", web::get().to(match_history::<S>));
}

/// Health check endpoint
async fn health_check<S: MatchStore>(state: web::Data<AppState<S>>) -> impl Responder {
    let store_healthy = state.engine.store().health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank workers for a job
///
/// GET /api/v1/jobs/{job_id}/matches?topN=10
async fn job_matches<S: MatchStore>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    let job_id = path.into_inner();
    let top_n = match resolve_top_n(&query, &state.matching) {
        Ok(top_n) => top_n,
        Err(response) => return response,
    };

    match state.engine.match_workers_to_job(job_id, top_n).await {
        Ok(matches) => HttpResponse::Ok().json(MatchListResponse {
            anchor_id: job_id,
            direction: MatchDirection::WorkersForJob,
            total_results: matches.len(),
            matches,
        }),
        Err(e) => error_response(e),
    }
}

/// Rank open jobs for a worker
///
/// GET /api/v1/workers/{worker_id}/matches?topN=10
async fn worker_matches<S: MatchStore>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    let worker_id = path.into_inner();
    let top_n = match resolve_top_n(&query, &state.matching) {
        Ok(top_n) => top_n,
        Err(response) => return response,
    };

    match state.engine.match_jobs_to_worker(worker_id, top_n).await {
        Ok(matches) => HttpResponse::Ok().json(MatchListResponse {
            anchor_id: worker_id,
            direction: MatchDirection::JobsForWorker,
            total_results: matches.len(),
            matches,
        }),
        Err(e) => error_response(e),
    }
}

/// Recent match history
///
/// GET /api/v1/matches/history?limit=50
async fn match_history<S: MatchStore>(
    state: web::Data<AppState<S>>,
    query: web::Query<HistoryQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let limit = query
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.matching.history_limit);

    match state.engine.recent_matches(limit).await {
        Ok(matches) => HttpResponse::Ok().json(MatchHistoryResponse {
            count: matches.len(),
            matches,
        }),
        Err(e) => error_response(e),
    }
}

// Cap the requested size at the configured maximum
fn resolve_top_n(query: &MatchQuery, matching: &MatchingSettings) -> Result<usize, HttpResponse> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for match query: {:?}", errors);
        return Err(validation_failed(errors));
    }

    Ok(query
        .top_n
        .map(|n| n as usize)
        .unwrap_or(matching.default_top_n)
        .min(matching.max_top_n))
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn error_response(error: MatchError) -> HttpResponse {
    match error {
        MatchError::JobNotFound(_) | MatchError::WorkerNotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: error.to_string(),
                status_code: 404,
            })
        }
        MatchError::Store(ref e) => {
            tracing::error!("Store failure while matching: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Store unavailable".to_string(),
                message: error.to_string(),
                status_code: 500,
            })
        }
    }
}
