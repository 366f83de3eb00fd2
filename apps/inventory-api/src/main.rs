//! Inventory API - REST service for product catalog and stock tracking

mod api;
mod config;
mod openapi;
mod state;

use axum_helpers::server::{close_mongo, create_production_app, health_router};
use config::{Config, StorageBackend};
use core_config::tracing::{init_tracing, install_color_eyre};
use state::{AppState, Storage};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Starting Inventory API");

    let storage = match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using the in-memory product store");
            Storage::Memory
        }
        StorageBackend::Mongodb => {
            // from_env guarantees the config is present for this backend
            let mongo_config = config
                .mongodb
                .clone()
                .ok_or_else(|| eyre::eyre!("MongoDB backend selected without configuration"))?;

            info!("Connecting to MongoDB at {}", mongo_config.url());
            let client =
                database::mongodb::connect_from_config_with_retry(&mongo_config, None).await?;
            let db = client.database(mongo_config.database());

            info!(
                "Successfully connected to MongoDB database: {}",
                mongo_config.database()
            );

            Storage::Mongo { client, db }
        }
    };

    let state = AppState { config, storage };

    // Initialize database indexes (no-op for the in-memory backend)
    api::init_indexes(&state).await?;

    // Build REST routes
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        "Inventory API listening on port {}",
        state.config.server.port
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Storage::Mongo { client, .. } = state.storage {
                close_mongo(client, "inventory-api").await;
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    Ok(())
}
