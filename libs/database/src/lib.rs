//! Database library providing the SQLite storage handle and shared utilities
//!
//! The service owns exactly one [`sqlite::DatabaseConnection`] (a small pool),
//! created at startup and handed to every repository that needs it.
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sqlite::{self, SqliteConfig};
//! use migration::Migrator;
//!
//! let config = SqliteConfig::from_env()?;
//! let db = sqlite::connect_from_config_with_retry(config, None).await?;
//! sqlite::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
