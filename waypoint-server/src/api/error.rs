//! API Error Handling
//!
//! Unified error type and conversion for API responses. Every error body
//! has the shape `{"detail": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waypoint_core::geo::InvalidCoordinates;

use crate::service::{location_service, runner_service};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed,
    /// Request could not be parsed into the expected query, path or body
    Unprocessable(String),
}

impl ApiError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(serde_json::json!({ "detail": message }))).into_response()
    }
}

impl From<InvalidCoordinates> for ApiError {
    fn from(err: InvalidCoordinates) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<runner_service::RunnerError> for ApiError {
    fn from(err: runner_service::RunnerError) -> Self {
        match err {
            runner_service::RunnerError::NotFound(_) => {
                ApiError::NotFound("Runner not found".to_string())
            }
            runner_service::RunnerError::NoRunnersAvailable => {
                ApiError::NotFound("No runners available".to_string())
            }
            runner_service::RunnerError::InvalidCoordinates(err) => err.into(),
        }
    }
}

impl From<location_service::LocationError> for ApiError {
    fn from(err: location_service::LocationError) -> Self {
        match err {
            location_service::LocationError::NotFound(_) => {
                ApiError::NotFound("Location not found".to_string())
            }
            location_service::LocationError::InvalidCoordinates(err) => err.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
