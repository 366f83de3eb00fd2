//! Database library providing the MongoDB connector and shared utilities
//!
//! This library wraps connection management, health checks, and retry logic
//! so services don't reimplement them per app.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "inventory");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! let collection = db.collection::<Product>("products");
//! ```
//!
//! With retry on startup:
//!
//! ```ignore
//! use database::common::RetryConfig;
//! use database::mongodb;
//!
//! let retry = RetryConfig::new().with_max_retries(5);
//! let client = mongodb::connect_from_config_with_retry(&config, Some(retry)).await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::RetryConfig;
