//! Inventory API routes

use axum::Router;
use domain_inventory::{
    InMemoryProductRepository, InventoryService, MongoProductRepository, handlers,
};
use tracing::info;

use crate::state::{AppState, Storage};

/// Create the inventory router for the configured backend
pub fn router(state: &AppState) -> Router {
    match &state.storage {
        Storage::Memory => {
            let repository = if state.config.environment.is_development() {
                info!("Seeding in-memory catalog with sample products");
                InMemoryProductRepository::seeded()
            } else {
                InMemoryProductRepository::new()
            };
            handlers::router(InventoryService::new(repository))
        }
        Storage::Mongo { db, .. } => {
            let repository = MongoProductRepository::new(db);
            handlers::router(InventoryService::new(repository))
        }
    }
}

/// Initialize product indexes (MongoDB backend only)
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    if let Storage::Mongo { db, .. } = &state.storage {
        let repository = MongoProductRepository::new(db);
        repository.init_indexes().await?;
    }
    Ok(())
}
