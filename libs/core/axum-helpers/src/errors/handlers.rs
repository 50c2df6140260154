use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Fallback for unmatched routes and unsupported methods.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::RouteNotFound.code(), "Route not found");
    error_response(StatusCode::NOT_FOUND, "Route not found")
}
