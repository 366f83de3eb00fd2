//! Health check endpoints

use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde::Serialize;

use crate::state::{AppState, Storage};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Basic health check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "inventory-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check.
///
/// The in-memory backend is ready as soon as the process is up; the
/// MongoDB backend gets a live connection probe and reports 503 when
/// the database is unreachable.
async fn ready(state: AppState) -> impl IntoResponse {
    let mut checks: Vec<(&str, HealthCheckFuture)> = Vec::new();

    if let Storage::Mongo { client, .. } = &state.storage {
        checks.push((
            "mongodb",
            Box::pin(async move {
                let status = database::mongodb::check_health_detailed(client).await;
                if status.healthy {
                    Ok(())
                } else {
                    let message = status
                        .message
                        .unwrap_or_else(|| "MongoDB ping failed".to_string());
                    Err(message)
                }
            }),
        ));
    }

    run_health_checks(checks).await
}

/// Create health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(move || ready(state)))
}
