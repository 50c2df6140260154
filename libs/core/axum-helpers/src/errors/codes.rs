//! Error codes attached to every logged error response.
//!
//! Clients only see the `{success, error, details}` envelope; the code is a
//! log field (`error_code`) so failures can be grouped in monitoring.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or query failed validation
    ValidationError,

    /// Request was malformed in some other way (e.g. a bad path id)
    BadRequest,

    /// Request body was not valid JSON
    InvalidJson,

    /// Requested record does not exist
    NotFound,

    /// No route matches the request
    RouteNotFound,

    // Server errors
    /// An unexpected internal failure
    InternalError,

    /// A handler panicked
    Panic,

    /// A dependency (the database) is not reachable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Query or connection failure reported by the database
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Panic => "PANIC",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::BadRequest => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::RouteNotFound => 1005,
            Self::InternalError => 1500,
            Self::Panic => 1501,
            Self::ServiceUnavailable => 1503,
            Self::DatabaseError => 2001,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
