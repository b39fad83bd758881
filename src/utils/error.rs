//! Error Handling Utilities
//!
//! Application-wide error type and its JSON rendering for the bloglist API.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::StoreError;

/// Message returned for ids that are not valid store identifiers
pub const MALFORMED_ID_MESSAGE: &str = "malformatted id";

/// Main application error type that can represent errors from any layer
#[derive(Error, Debug)]
pub enum AppError {
    /// Candidate record failed shape, length or required-field rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Candidate record violated a uniqueness constraint
    #[error("Uniqueness error: {0}")]
    Uniqueness(String),

    /// Identifier in the request path could not be parsed
    #[error("Malformed id: {0}")]
    MalformedId(String),

    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A dependency the service needs is not answering
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Record store faults unrelated to the candidate's content
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A background task serving the request failed to complete
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Password hashing errors
    #[error("Password hashing error: {0}")]
    HashingError(#[from] bcrypt::BcryptError),
}

/// Error body returned by every failing endpoint
///
/// Clients match on the content of `error`, so it always carries the
/// human-readable message rather than the code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: &str, error: &str) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
        }
    }
}

impl AppError {
    /// HTTP status this error is rendered with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Uniqueness(_) | AppError::MalformedId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(StoreError::Timeout(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(StoreError::DuplicateKey { .. }) => StatusCode::BAD_REQUEST,
            AppError::Store(_)
            | AppError::Internal(_)
            | AppError::Configuration(_)
            | AppError::HashingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        }

        let (error_code, message) = match self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg),
            AppError::Uniqueness(msg) => ("UNIQUENESS_ERROR", msg),
            AppError::MalformedId(_) => ("MALFORMED_ID", MALFORMED_ID_MESSAGE.to_string()),
            AppError::NotFound(msg) => ("NOT_FOUND", msg),
            AppError::Unavailable(msg) => ("SERVICE_UNAVAILABLE", msg),
            AppError::Store(StoreError::Timeout(_)) => (
                "STORE_UNAVAILABLE",
                "The record store is temporarily unavailable".to_string(),
            ),
            AppError::Store(StoreError::DuplicateKey { field }) => (
                "UNIQUENESS_ERROR",
                format!("expected `{}` to be unique", field),
            ),
            AppError::Store(StoreError::Database(_)) => (
                "DATABASE_ERROR",
                "A database error occurred".to_string(),
            ),
            AppError::Internal(_) => (
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
            AppError::Configuration(_) => (
                "CONFIGURATION_ERROR",
                "Server configuration error".to_string(),
            ),
            AppError::HashingError(_) => (
                "HASHING_ERROR",
                "Password hashing error".to_string(),
            ),
        };

        let error_response = ErrorResponse::new(error_code, &message);
        (status, Json(error_response)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Result type alias for operations that can return AppError
pub type AppResult<T> = Result<T, AppError>;
