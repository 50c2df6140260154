/// Unified database error type for storage-level operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SQLite errors surfaced through SeaORM
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sea_orm::DbErr),

    /// Filesystem errors while preparing the database location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] core_config::ConfigError),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
