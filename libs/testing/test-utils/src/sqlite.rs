//! SQLite test infrastructure
//!
//! Every [`TestDatabase`] is a fresh database file in its own temporary
//! directory, with all migrations applied. The directory is removed on drop.

use database::sqlite::{self, SqliteConfig};
use migration::Migrator;
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test database wrapper that ensures proper cleanup
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    path: PathBuf,
    // declared last so it is dropped after the pool
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a new, migrated, empty database
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("items.db");

        let connection = sqlite::connect_from_config(SqliteConfig::for_file(&path))
            .await
            .expect("Failed to open test database");

        sqlite::run_migrations::<Migrator>(&connection, "test")
            .await
            .expect("Failed to run migrations");

        tracing::debug!(path = %path.display(), "Test database ready");

        Self {
            connection,
            path,
            _dir: dir,
        }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Location of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
