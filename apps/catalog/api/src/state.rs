//! Application state management.
//!
//! The state is built once in `main` and cloned into handlers (cheap: the
//! connection is a pool handle).

use sea_orm::DatabaseConnection;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SQLite connection pool, opened once at startup
    pub db: DatabaseConnection,
}
