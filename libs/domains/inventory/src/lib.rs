//! Inventory Domain
//!
//! This module provides a complete domain implementation for tracking
//! inventory: product records, stock adjustments with clamping, dashboard
//! aggregation, and filtered/sorted catalog views.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   Service   │     │ Stats/View  │  ← pure engines over snapshots
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory/MongoDB backends)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     memory::InMemoryProductRepository,
//!     service::InventoryService,
//! };
//!
//! # fn example() {
//! // Create a repository and service
//! let repository = InMemoryProductRepository::seeded();
//! let service = InventoryService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod stats;
pub mod view;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{
    CreateProduct, Product, StockAdjustment, StockDirection, StockLevel, UpdateProduct,
};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::InventoryService;
pub use stats::{low_stock_list, summarize, InventorySummary};
pub use view::{ProductQuery, SortDirection, SortField, SortSpec, StatusFilter};
