//! SQLite storage handle
//!
//! Connection pooling, WAL setup, migration running and health checks for the
//! single-file database behind the catalog service.

mod config;
mod connector;
mod health;

pub use config::SqliteConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, ensure_parent_dir,
    run_migrations,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
