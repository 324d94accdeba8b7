//! # API REST
//!
//! REST API implementation for SlugLabs.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, status codes, CORS)
//!
//! Uses `api-shared` for wire types and `sluglabs-core` for all data operations.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod health;
pub mod positions;
pub mod submissions;

use axum::{
    routing::{get, post},
    Router,
};
use sluglabs_core::{PositionService, SubmissionService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub positions: PositionService,
    pub submissions: SubmissionService,
}

impl AppState {
    pub fn new(positions: PositionService, submissions: SubmissionService) -> Self {
        Self {
            positions,
            submissions,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::db_health,
        positions::list_positions,
        positions::match_position,
        positions::get_position,
        submissions::list_submissions,
        submissions::get_submission,
        submissions::delete_submission,
        submissions::follow_up,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::DbHealthRes,
        api_shared::ErrorRes,
        api_shared::PositionSummary,
        api_shared::PositionDetail,
        api_shared::PositionsRes,
        api_shared::PositionRes,
        api_shared::MatchRes,
        api_shared::Submission,
        api_shared::SubmissionStatus,
        api_shared::SubmissionsRes,
        api_shared::SubmissionRes,
        api_shared::DeleteSubmissionRes,
        api_shared::FollowUpEmail,
    ))
)]
pub struct ApiDoc;

/// Build the REST router over the given state.
///
/// Includes Swagger UI at `/swagger-ui` and the OpenAPI document at `/api-docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/db/health", get(health::db_health))
        .route("/positions", get(positions::list_positions))
        .route("/positions/match", get(positions::match_position))
        .route("/positions/:id", get(positions::get_position))
        .route("/submissions", get(submissions::list_submissions))
        .route(
            "/submissions/:id",
            get(submissions::get_submission).delete(submissions::delete_submission),
        )
        .route("/submissions/:id/follow-up", post(submissions::follow_up))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
