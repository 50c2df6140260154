use axum_helpers::server::{close_database, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sqlite;
use domain_items::{ItemService, SeaOrmItemRepository};
use migration::Migrator;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = sqlite::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;

    sqlite::run_migrations::<Migrator>(&db, config.app.name).await?;

    let health = sqlite::check_health_detailed(&db).await;
    if !health.healthy {
        eyre::bail!(
            "Database is not usable: {}",
            health.message.unwrap_or_default()
        );
    }
    info!(response_time_ms = health.response_time_ms, "Database ready");

    if config.seed.on_empty {
        let service = ItemService::new(SeaOrmItemRepository::new(db.clone()));
        let mut rng = StdRng::from_os_rng();
        service
            .seed_if_empty(config.seed.item_count, &mut rng)
            .await?;
    }

    let server_config = config.server.clone();
    let state = AppState {
        config,
        db: db.clone(),
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &server_config)?;

    info!("Starting catalog API with graceful shutdown (30s timeout)");

    create_production_app(
        router,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connection");
            close_database(db, "sqlite").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
