use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::presentation::http::response::error_response;
use yieldlab_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// Error returned by every HTTP handler
///
/// Carries the numeric [`ErrorCode`] for logging; the client only sees
/// `{ "error": message }` with the mapped status.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code: error_code.code(),
            message: message.into(),
        }
    }
}

fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound(_) | DomainError::ScenarioNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Validation(_) | DomainError::InvalidInput(_) | DomainError::InvalidTier(_) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(&err);

        if matches!(err.severity(), ErrorSeverity::Error | ErrorSeverity::Critical) {
            error!(code = err.code().code(), "Request failed: {}", err);
        }

        Self {
            status,
            code: err.code().code(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::InvalidInput,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status, &self.message)
    }
}
