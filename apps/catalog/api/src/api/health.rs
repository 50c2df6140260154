//! Readiness check backed by a real database round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::sqlite::check_health;
#[allow(unused_imports)]
use serde_json::json;

/// Readiness: 200 when the database answers, 503 otherwise
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Ready to serve", example = json!({"status": "ready", "database": "connected"})),
        (status = 503, description = "A dependency is unavailable", example = json!({"status": "not ready", "database": "disconnected"}))
    )
)]
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
