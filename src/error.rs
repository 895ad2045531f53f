//! Application error types.
//!
//! Page and API handlers return [`AppError`], which maps each failure to an
//! HTTP status and a small HTML body so HTMX swaps show something readable.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by page and fragment handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested course id does not exist in the catalog.
    #[error("course {0} not found")]
    CourseNotFound(u32),
    /// Request referenced a session that no longer exists.
    #[error("session not found")]
    SessionNotFound,
    /// Request is missing or malformed input.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CourseNotFound(_) => StatusCode::NOT_FOUND,
            Self::SessionNotFound => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(name: "request.error", status = %status, error = %self, "Request failed");
        let body = format!(
            r#"<div class="rounded-lg border border-red-200 bg-red-50 p-4 text-sm text-red-700">{self}</div>"#
        );
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::CourseNotFound(42).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::SessionNotFound.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::BadRequest("missing field".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
