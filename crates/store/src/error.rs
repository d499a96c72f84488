//! Error types for the persistence layer.
//!
//! Three categories cover everything a store operation can produce:
//! [`ResourceError`] for record-state problems (absent, duplicate),
//! [`SearchError`] for invalid search input (the only strictly validated
//! client input at this layer), and [`BackendError`] for infrastructure
//! failures. The HTTP layer maps these onto status codes; nothing here knows
//! about HTTP.

use thiserror::Error;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record-state errors.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Search input errors.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Backend infrastructure errors.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to the state of a stored record.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The record kind ("recipe", "user").
        kind: &'static str,
        /// The record's identifier.
        id: String,
    },

    /// A record with the same unique field already exists.
    #[error("A user with that {field} already exists.")]
    AlreadyExists {
        /// The record kind.
        kind: &'static str,
        /// The unique field that collided ("username", "email").
        field: &'static str,
    },
}

/// Errors produced while turning raw search parameters into a filter.
///
/// These are the builder's only failure modes: malformed-but-well-typed
/// input (an unknown category, a term that matches nothing) is a zero-results
/// case, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No usable search criteria were supplied.
    #[error(
        "At least one search parameter is required. Supported params: title, source, submitted_by, category, vegetarian, featured, steps, footnotes, tags, ingredients, wildcard"
    )]
    NoCriteria,

    /// The `limit` parameter failed to parse or was less than 1.
    #[error("'limit' must be a positive integer")]
    InvalidLimit,
}

/// Errors originating in storage infrastructure.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Failed to obtain a connection.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        /// What went wrong.
        message: String,
    },

    /// Failed to serialize or deserialize a stored document.
    #[error("serialization failed: {message}")]
    Serialization {
        /// What went wrong.
        message: String,
    },

    /// Any other backend failure.
    #[error("{message}")]
    Internal {
        /// What went wrong.
        message: String,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_messages() {
        assert_eq!(
            SearchError::InvalidLimit.to_string(),
            "'limit' must be a positive integer"
        );
        assert!(
            SearchError::NoCriteria
                .to_string()
                .starts_with("At least one search parameter is required")
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ResourceError::NotFound {
            kind: "recipe",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "recipe not found: 42");
    }

    #[test]
    fn test_already_exists_display() {
        let err = ResourceError::AlreadyExists {
            kind: "user",
            field: "email",
        };
        assert_eq!(err.to_string(), "A user with that email already exists.");
    }
}
