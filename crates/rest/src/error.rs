//! Error types for the participant REST API.
//!
//! This module defines all error types used throughout the REST layer, with
//! automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes:
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | ValidationError | 400 | invalid |
//! | NotFound | 404 | not-found |
//! | BackendError | 500 | internal |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use superleague_persistence::error::{ResourceError, StorageError, ValidationError};

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status
/// codes.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Participant not found (HTTP 404).
    NotFound {
        /// The participant ID.
        id: i64,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::NotFound { id } => {
                write!(f, "Participant not found: {}", id)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            RestError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("Participant {} not found", id),
            ),
            RestError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                message.clone(),
            ),
        };

        let body = create_error_body(code, &details);
        (status, Json(body)).into_response()
    }
}

/// Creates the JSON error body.
///
/// # Arguments
///
/// * `code` - The machine-readable error code
/// * `message` - Human-readable details
fn create_error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { id } => RestError::NotFound { id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
