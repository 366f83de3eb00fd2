/// Database connection cleanup utilities.
///
/// This module provides helpers for properly closing database connections
/// during graceful shutdown.
use tracing::info;

/// Cleanup handler for MongoDB connections.
///
/// Shuts the client down explicitly so pooled connections close before the
/// process exits, and logs the operation for observability.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::cleanup::close_mongo;
/// use mongodb::Client;
///
/// close_mongo(client, "main").await;
/// ```
pub async fn close_mongo(client: mongodb::Client, name: &str) {
    client.shutdown().await;
    info!("MongoDB connection '{}' closed successfully", name);
}
