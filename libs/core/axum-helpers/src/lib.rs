//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog service.
//!
//! ## Modules
//!
//! - **[`server`]**: Router factory with docs and middleware, health checks, graceful shutdown
//! - **[`http`]**: CORS configuration
//! - **[`errors`]**: `AppError` and the `{success: false, error, details?}` envelope
//! - **[`extractors`]**: JSON body extractor that rejects with the envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use std::time::Duration;
//!
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config)?;
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_database, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::create_cors_layer;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::JsonBody;
