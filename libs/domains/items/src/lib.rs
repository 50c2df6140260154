//! Items Domain
//!
//! A paginated, searchable item catalog stored in SQLite through SeaORM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, id extraction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Payload validation, pagination metadata, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Query     │  ← Shared WHERE predicate for count and page queries
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, SeaOrmItemRepository};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite://data/items.db?mode=rwc").await?;
//!
//! let service = ItemService::new(SeaOrmItemRepository::new(db));
//! let router = axum::Router::new().nest("/items", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod params;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;
pub mod sqlite;
pub mod validation;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ListResponse, NewItem, Pagination};
pub use params::{ListParams, RawListQuery};
pub use repository::ItemRepository;
pub use service::ItemService;
pub use sqlite::SeaOrmItemRepository;
