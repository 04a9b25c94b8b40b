//! API error handling
//!
//! Translates domain and auth failures into HTTP responses: duplicate
//! holder conflicts map to 409, missing policies to 404, illegal status
//! transitions to 400, request-validation failures to 422, and anything
//! from the storage backend to an opaque 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_policy::PolicyError;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::DuplicateHolder => ApiError::Conflict(err.to_string()),
            PolicyError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PolicyError::InvalidTransition { .. } => ApiError::BadRequest(err.to_string()),
            PolicyError::Store(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InactiveUser => ApiError::Forbidden(err.to_string()),
            AuthError::Hashing(msg) => ApiError::Internal(msg),
            _ => ApiError::Unauthorized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_policy::{PolicyStatus, StoreError};

    #[test]
    fn test_duplicate_holder_maps_to_conflict() {
        let api_err = ApiError::from(PolicyError::DuplicateHolder);
        assert!(matches!(api_err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_invalid_transition_maps_to_bad_request() {
        let api_err = ApiError::from(PolicyError::InvalidTransition {
            from: PolicyStatus::Void,
            to: PolicyStatus::Active,
        });
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_store_error_maps_to_internal() {
        let api_err = ApiError::from(PolicyError::Store(StoreError::backend("boom")));
        assert!(matches!(api_err, ApiError::Internal(_)));
    }
}
