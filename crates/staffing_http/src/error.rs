//! Mapping from core error kinds to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use staffing_core::{ErrorKind, ServiceError};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Malformed path or query parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request body is not valid JSON for the target type.
    #[error("cannot decode request body: {0}")]
    Decode(String),

    #[error("route not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

/// Error text attached to error responses so the access log can report it
/// next to the request's correlation id.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(err) => match err.kind() {
                ErrorKind::BadRequest
                | ErrorKind::Parse
                | ErrorKind::AlreadyExists
                | ErrorKind::PositionDoesNotExist => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let mut response = (status, Json(json!({ "error": message.as_str() }))).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use staffing_core::ServiceError;
    use uuid::Uuid;

    #[test]
    fn service_kinds_map_to_expected_statuses() {
        let cases = [
            (ServiceError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ServiceError::PositionDoesNotExist(Uuid::nil()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Parse {
                    input: "x".into(),
                    reason: "y".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn error_responses_carry_message_for_access_log() {
        use super::ErrorMessage;
        use axum::response::IntoResponse;

        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let message = response.extensions().get::<ErrorMessage>().unwrap();
        assert_eq!(message.0, "method not allowed");
    }

    #[test]
    fn body_decode_failures_are_server_errors() {
        assert_eq!(
            ApiError::Decode("eof".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
