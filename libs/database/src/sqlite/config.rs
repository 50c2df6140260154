use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use sea_orm::ConnectOptions;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/items.db?mode=rwc";

/// SQLite connection configuration
///
/// `url` accepts anything sqlx understands, e.g. `sqlite://data/items.db?mode=rwc`
/// or `sqlite::memory:`. Pool sizes stay small: SQLite serialises writers anyway.
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    /// Log every statement through sqlx
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convenience for a database file at `path`, created on first connect.
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self::new(format!("sqlite://{}?mode=rwc", path.into().display()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Filesystem path of the database file, `None` for in-memory databases.
    pub fn file_path(&self) -> Option<PathBuf> {
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(&self.url);
        let path = rest.split('?').next().unwrap_or_default();

        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

impl FromEnv for SqliteConfig {
    /// Reads `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`,
    /// `DB_CONNECT_TIMEOUT_SECS`, `DB_ACQUIRE_TIMEOUT_SECS` and `DB_SQLX_LOGGING`.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", "5")?,
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", "1")?,
            connect_timeout_secs: env_parse_or("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_parse_or("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse_or("DB_SQLX_LOGGING", "false")?,
        })
    }
}
