use async_trait::async_trait;

use crate::error::InventoryResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (in-memory, MongoDB).
/// Collections are keyed by id; snapshot order is insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Full snapshot of the catalog; empty catalog yields an empty vec
    async fn get_all(&self) -> InventoryResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Product>>;

    /// Create a new product, assigning `max(existing ids) + 1` (1 if empty)
    /// and stamping `last_updated`
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product>;

    /// Merge the provided fields over an existing product and restamp
    /// `last_updated`; fails with NotFound if the id does not exist
    async fn update(&self, id: i64, input: UpdateProduct) -> InventoryResult<Product>;

    /// Remove a product and return the removed record; fails with NotFound
    /// if the id does not exist
    async fn delete(&self, id: i64) -> InventoryResult<Product>;
}
