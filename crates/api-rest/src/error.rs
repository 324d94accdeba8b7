//! HTTP mapping for core errors.
//!
//! Every failure leaves a handler as a JSON `{ "error": ... }` envelope. Upstream messages are
//! passed through verbatim.

use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use sluglabs_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid id")]
    InvalidId,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidId(_) => ApiError::InvalidId,
            CoreError::InvalidInput(msg) => ApiError::BadRequest(msg),
            CoreError::NotFound(msg) => ApiError::NotFound(msg),
            CoreError::Upstream(msg) | CoreError::Config(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        (
            status,
            Json(ErrorRes {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::InvalidId("ZZZ".into()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidInput("Invalid status".into()), StatusCode::BAD_REQUEST),
            (CoreError::NotFound("Not found".into()), StatusCode::NOT_FOUND),
            (CoreError::Upstream("timeout".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_invalid_id_message_is_fixed() {
        let err = ApiError::from(CoreError::InvalidId("ZZZ".into()));
        assert_eq!(err.to_string(), "Invalid id");
    }

    #[test]
    fn test_upstream_message_passed_through() {
        let err = ApiError::from(CoreError::Upstream("server selection timeout".into()));
        assert_eq!(err.to_string(), "server selection timeout");
    }
}
