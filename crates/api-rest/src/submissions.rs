//! Submission tracking endpoints.

use api_shared::{
    DeleteSubmissionRes, ErrorRes, FollowUpEmail, SubmissionRes, SubmissionsQuery, SubmissionsRes,
};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use sluglabs_core::SubmissionFilter;

use crate::{error::ApiError, AppState};

#[utoipa::path(
    get,
    path = "/submissions",
    params(SubmissionsQuery),
    responses(
        (status = 200, description = "Tracked submissions", body = SubmissionsRes),
        (status = 400, description = "Unknown status filter", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionsQuery>,
) -> Result<Json<SubmissionsRes>, ApiError> {
    let filter = SubmissionFilter::from_params(query.status.as_deref(), query.q.as_deref())?;
    let submissions = state.submissions.list(&filter).await?;
    Ok(Json(SubmissionsRes { submissions }))
}

#[utoipa::path(
    get,
    path = "/submissions/{id}",
    params(("id" = String, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission", body = SubmissionRes),
        (status = 404, description = "No such submission", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SubmissionRes>, ApiError> {
    let submission = state.submissions.get(&id).await?;
    Ok(Json(SubmissionRes { submission }))
}

#[utoipa::path(
    delete,
    path = "/submissions/{id}",
    params(("id" = String, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission deleted", body = DeleteSubmissionRes),
        (status = 404, description = "No such submission", body = ErrorRes)
    )
)]
/// Delete a submission
///
/// The deletion holds until the process restarts.
#[axum::debug_handler]
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteSubmissionRes>, ApiError> {
    let deleted_id = state.submissions.delete(&id).await?;
    Ok(Json(DeleteSubmissionRes {
        success: true,
        deleted_id,
    }))
}

#[utoipa::path(
    post,
    path = "/submissions/{id}/follow-up",
    params(("id" = String, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Generated follow-up email", body = FollowUpEmail),
        (status = 404, description = "No such submission", body = ErrorRes)
    )
)]
/// Generate a follow-up email for an earlier submission
///
/// Nothing is sent; the text is returned for the student to review.
#[axum::debug_handler]
pub async fn follow_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FollowUpEmail>, ApiError> {
    Ok(Json(state.submissions.follow_up(&id).await?))
}
