use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Close the database pool during shutdown.
///
/// Checkpoints the SQLite WAL as connections are released.
pub async fn close_database(db: DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!("Database connection '{}' closed successfully", name),
        Err(e) => error!("Error closing database connection '{}': {}", name, e),
    }
}
