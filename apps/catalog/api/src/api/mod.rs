use axum::{Router, routing::get};
use axum_helpers::health_router;

pub mod health;
pub mod items;
pub mod root;

use crate::state::AppState;

/// Every route the service exposes, before docs and middleware are added by
/// `axum_helpers::create_router`.
///
/// Health and readiness live here too so the fallback, tracing and CORS layers
/// apply to them like any other route.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health_router(state.config.app))
        .merge(stateful_router(state.clone()))
}

/// Routes that read [`AppState`] directly
fn stateful_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root_handler))
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
