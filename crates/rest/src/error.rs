//! Error types for the catalog API.
//!
//! Every error leaves the server as `{ "error": { "message": "<string>" } }`
//! with one of these status codes:
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | BadRequest | 400 |
//! | Unauthorized | 401 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Internal | 500 |
//!
//! Store errors map automatically: search-input errors and duplicate-record
//! errors are the client's fault (400/409); everything else from the backend
//! is a 500. The search builder only ever produces 400s - an unrecognized
//! category or a term that matches nothing is an empty result, not an error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_store::error::{BackendError, ResourceError, SearchError, StorageError};
use std::fmt;

/// The primary error type for API operations.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Missing or invalid credentials (HTTP 401).
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Record not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Unique-field collision (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    Internal {
        /// Error message.
        message: String,
    },
}

impl ApiError {
    /// Shorthand for a 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    /// Shorthand for a 401 with the given message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
        }
    }

    /// Shorthand for a 404 with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { message } => write!(f, "Bad request: {}", message),
            ApiError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            ApiError::NotFound { message } => write!(f, "Not found: {}", message),
            ApiError::Conflict { message } => write!(f, "Conflict: {}", message),
            ApiError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict { message } => (StatusCode::CONFLICT, message),
            ApiError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = serde_json::json!({
            "error": { "message": message }
        });

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Search(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for ApiError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { .. } => ApiError::NotFound {
                message: err.to_string(),
            },
            ResourceError::AlreadyExists { .. } => ApiError::Conflict {
                message: err.to_string(),
            },
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        ApiError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
