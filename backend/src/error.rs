use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Error codes shared with the frontend. Only `NotFound` is raised by the
/// current routes.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ValidationError,
    RateLimited,
    InternalError,
    NetworkError,
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::NetworkError => StatusCode::BAD_GATEWAY,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Error returned by API handlers. Renders as
/// `{"error": {"code", "message", "statusCode"}}`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "error": {
                "code": self.code,
                "message": self.message,
                "statusCode": self.status().as_u16(),
            }
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!("{:?}: {}", self.code, self.message);
        }
        (self.status(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(ErrorCode::BadRequest.status().as_u16(), 400);
        assert_eq!(ErrorCode::Unauthorized.status().as_u16(), 401);
        assert_eq!(ErrorCode::Forbidden.status().as_u16(), 403);
        assert_eq!(ErrorCode::NotFound.status().as_u16(), 404);
        assert_eq!(ErrorCode::ValidationError.status().as_u16(), 422);
        assert_eq!(ErrorCode::RateLimited.status().as_u16(), 429);
        assert_eq!(ErrorCode::InternalError.status().as_u16(), 500);
        assert_eq!(ErrorCode::NetworkError.status().as_u16(), 502);
        assert_eq!(ErrorCode::ServiceUnavailable.status().as_u16(), 503);
    }

    #[test]
    fn serializes_error_body() {
        let err = AppError::not_found("User not found");
        assert_eq!(
            err.to_json(),
            json!({
                "error": {
                    "code": "NOT_FOUND",
                    "message": "User not found",
                    "statusCode": 404,
                }
            })
        );
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn into_response_uses_code_status() {
        let response = AppError::new(ErrorCode::InternalError, "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
