use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use super::SqliteConfig;
use crate::common::{DatabaseError, RetryConfig, retry, retry_with_backoff};

/// Open a pool against `database_url` with the default pool settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DatabaseError> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Create the directory holding the database file if it does not exist yet.
pub fn ensure_parent_dir(config: &SqliteConfig) -> Result<(), DatabaseError> {
    if let Some(parent) = config.file_path().as_deref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Connect using a [`SqliteConfig`] and switch the database to WAL journaling.
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::sqlite::{SqliteConfig, connect_from_config};
///
/// let db = connect_from_config(SqliteConfig::from_env()?).await?;
/// ```
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DatabaseError> {
    ensure_parent_dir(&config)?;
    let in_memory = config.file_path().is_none();

    let db = connect_with_options(config.into_connect_options()).await?;

    // journal_mode is stored in the file, one connection is enough
    if !in_memory {
        let mode = enable_wal(&db).await?;
        debug!(journal_mode = %mode, "SQLite journal mode configured");
    }

    info!("Successfully connected to SQLite database");
    Ok(db)
}

/// Switch to WAL and return the mode SQLite reports back.
///
/// The pragma answers with a row; it only takes effect when that row is read.
async fn enable_wal(db: &DatabaseConnection) -> Result<String, DbErr> {
    let row = db
        .query_one_raw(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA journal_mode = WAL".to_owned(),
        ))
        .await?
        .ok_or_else(|| DbErr::Custom("PRAGMA journal_mode returned no row".to_owned()))?;

    row.try_get_by_index(0)
}

async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    Database::connect(options).await
}

/// [`connect_from_config`] with exponential backoff, for startup.
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DatabaseError> {
    let attempt = || connect_from_config(config.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}

/// Bring the schema up to date with `M`.
///
/// Safe to call on every start: applied migrations are skipped.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn journal_mode(db: &DatabaseConnection) -> String {
        let row = db
            .query_one_raw(Statement::from_string(
                DatabaseBackend::Sqlite,
                "PRAGMA journal_mode".to_owned(),
            ))
            .await
            .unwrap()
            .unwrap();
        let mode: String = row.try_get_by_index(0).unwrap();
        mode.to_lowercase()
    }

    #[tokio::test]
    async fn test_connect_creates_parent_dir_and_enables_wal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("items.db");

        let db = connect_from_config(SqliteConfig::for_file(&path)).await.unwrap();
        assert!(path.exists());

        assert_eq!(journal_mode(&db).await, "wal");
    }

    #[tokio::test]
    async fn test_wal_persists_in_the_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");

        let first = connect_from_config(SqliteConfig::for_file(&path)).await.unwrap();
        first.close().await.unwrap();

        // a plain pool that never issues the pragma still sees WAL
        let reopened = Database::connect(SqliteConfig::for_file(&path).into_connect_options())
            .await
            .unwrap();
        assert_eq!(journal_mode(&reopened).await, "wal");
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let db = connect("sqlite::memory:").await.unwrap();
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_retry_gives_up_on_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        // read-only mode never creates the file
        let path = dir.path().join("missing.db");
        let config = SqliteConfig::new(format!("sqlite://{}?mode=ro", path.display()));
        let policy = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(1)
            .without_jitter();

        assert!(connect_from_config_with_retry(config, Some(policy)).await.is_err());
    }
}
