//! Configuration for Inventory API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Which product store backs the service.
///
/// Selected via `STORAGE_BACKEND` (`memory` or `mongodb`). The in-memory
/// store is the default and needs no external services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Mongodb,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub storage_backend: StorageBackend,
    /// Present only when the mongodb backend is selected
    pub mongodb: Option<MongoConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let storage_backend = match env_or_default("STORAGE_BACKEND", "memory").as_str() {
            "memory" => StorageBackend::Memory,
            "mongodb" => StorageBackend::Mongodb,
            other => {
                return Err(eyre::eyre!(
                    "Unknown STORAGE_BACKEND '{}' (expected 'memory' or 'mongodb')",
                    other
                ))
            }
        };

        // Mongo settings are only required when that backend is active
        let mongodb = match storage_backend {
            StorageBackend::Mongodb => Some(MongoConfig::from_env()?),
            StorageBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            storage_backend,
            mongodb,
        })
    }
}
