//! Position directory endpoints.

use api_shared::{ErrorRes, MatchRes, PositionRes, PositionsQuery, PositionsRes};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::{error::ApiError, AppState};

#[utoipa::path(
    get,
    path = "/positions",
    params(PositionsQuery),
    responses(
        (status = 200, description = "Position directory", body = PositionsRes),
        (status = 500, description = "Document store failure", body = PositionsRes)
    )
)]
/// List every position as a directory summary
///
/// Records with missing or oddly named fields are still listed, with defaults filled in.
/// A store failure returns an empty list alongside the raw error message.
#[axum::debug_handler]
pub async fn list_positions(
    State(state): State<AppState>,
    Query(query): Query<PositionsQuery>,
) -> Result<Json<PositionsRes>, (StatusCode, Json<PositionsRes>)> {
    match state.positions.list_summaries(query.q.as_deref()).await {
        Ok(positions) => Ok(Json(PositionsRes {
            positions,
            error: None,
        })),
        Err(e) => {
            tracing::error!("List positions error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PositionsRes {
                    positions: Vec::new(),
                    error: Some(e.to_string()),
                }),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/positions/match",
    responses(
        (status = 200, description = "Matched position, or null when none exist", body = MatchRes),
        (status = 500, description = "Document store failure", body = ErrorRes)
    )
)]
/// The position currently offered to the student as a match
#[axum::debug_handler]
pub async fn match_position(State(state): State<AppState>) -> Result<Json<MatchRes>, ApiError> {
    let position = state.positions.first_match().await?;
    Ok(Json(MatchRes { position }))
}

#[utoipa::path(
    get,
    path = "/positions/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    responses(
        (status = 200, description = "Position detail", body = PositionRes),
        (status = 400, description = "Malformed id", body = ErrorRes),
        (status = 404, description = "No such position", body = ErrorRes),
        (status = 500, description = "Document store failure", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PositionRes>, ApiError> {
    let position = state.positions.detail(&id).await?;
    Ok(Json(PositionRes { position }))
}
