use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use quorum_core::error::CoreError;
use quorum_db::error::StoreError;
use quorum_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload with a machine-readable kind.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(kind: &str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            kind: kind.to_string(),
        }
    }
}

/// Maps a service error onto an HTTP status and a machine-readable kind.
fn classify(err: &ServiceError) -> (StatusCode, &'static str) {
    match err {
        ServiceError::CoreError(CoreError::Validation { kind, .. }) => {
            (StatusCode::BAD_REQUEST, kind.as_str())
        }
        ServiceError::CoreError(CoreError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, "invalid_input")
        }
        ServiceError::CoreError(CoreError::NotFound(_))
        | ServiceError::StoreError(StoreError::NotFound(_))
        | ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        ServiceError::CoreError(CoreError::Authorization(_))
        | ServiceError::AuthorizationError(_) => (StatusCode::FORBIDDEN, "authorization"),
        ServiceError::CoreError(CoreError::Conflict(_))
        | ServiceError::StoreError(StoreError::VersionConflict { .. }) => {
            (StatusCode::CONFLICT, "conflict")
        }
        ServiceError::StoreError(_)
        | ServiceError::CoreError(_)
        | ServiceError::InvalidConfiguration(_)
        | ServiceError::InvariantViolation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

/// ## Summary
/// Renders a service error as a JSON error payload with the mapped status.
///
/// ## Side Effects
/// Writes the status code and body to the response.
pub fn render_service_error(res: &mut salvo::Response, err: &ServiceError) {
    let (status, kind) = classify(err);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = ?err, "Request failed with internal error");
        res.status_code(status);
        res.render(Json(ErrorResponse::new(kind, "Internal server error")));
        return;
    }

    tracing::debug!(error = %err, kind, "Request rejected");
    res.status_code(status);
    res.render(Json(ErrorResponse::new(kind, err.to_string())));
}

/// ## Summary
/// Renders a 400 response for malformed request input that never reached the
/// engine (bad JSON, unparsable path or query parameters).
pub fn render_bad_request(res: &mut salvo::Response, message: impl Into<String>) {
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorResponse::new("invalid_input", message)));
}
