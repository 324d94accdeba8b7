use api_shared::{DbHealthRes, HealthRes, HealthService};
use axum::{extract::State, http::StatusCode, response::Json};

use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Reports process liveness only. Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/db/health",
    responses(
        (status = 200, description = "Document store reachable", body = DbHealthRes),
        (status = 500, description = "Document store unreachable", body = DbHealthRes)
    )
)]
/// Ping the document store
#[axum::debug_handler]
pub async fn db_health(State(state): State<AppState>) -> (StatusCode, Json<DbHealthRes>) {
    match state.positions.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthService::db_ok())),
        Err(e) => {
            tracing::error!("Database ping error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthService::db_failed(e.to_string())),
            )
        }
    }
}
