use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::sqlite::SqliteConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Sample data loaded into an empty database at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub on_empty: bool,
    pub item_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            on_empty: true,
            item_count: 500,
        }
    }
}

impl FromEnv for SeedConfig {
    /// - SEED_ON_EMPTY: defaults to true
    /// - SEED_ITEM_COUNT: defaults to 500
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            on_empty: env_parse_or("SEED_ON_EMPTY", "true")?,
            item_count: env_parse_or("SEED_ITEM_COUNT", "500")?,
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub seed: SeedConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?; // DATABASE_URL defaults to data/items.db
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000
        let seed = SeedConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            seed,
            environment,
        })
    }
}
