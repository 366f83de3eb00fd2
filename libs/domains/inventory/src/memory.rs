//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// In-memory product store backed by a `tokio::sync::RwLock`
///
/// Products are kept in insertion order. Every mutation is a complete
/// read-modify-write under the write guard, so two concurrent mutations
/// on the same id never interleave partially.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with a small starter catalog
    ///
    /// Covers the whole stock spectrum (out, low, medium, high) so the
    /// dashboard endpoints have something to show in development.
    pub fn seeded() -> Self {
        let catalog = vec![
            ("Wireless Mouse", "WM-1001", 24.99, 120, 15),
            ("USB-C Cable 2m", "UC-2002", 9.50, 8, 10),
            ("Mechanical Keyboard", "MK-3003", 89.99, 0, 5),
            ("27in Monitor", "MN-4004", 249.00, 18, 10),
            ("Laptop Stand", "LS-5005", 39.95, 55, 10),
        ];

        let products = catalog
            .into_iter()
            .enumerate()
            .map(|(i, (name, sku, price, current_stock, low_stock_threshold))| {
                Product::new(
                    i as i64 + 1,
                    CreateProduct {
                        name: name.to_string(),
                        sku: sku.to_string(),
                        price,
                        current_stock,
                        low_stock_threshold,
                    },
                )
            })
            .collect();

        Self {
            products: RwLock::new(products),
        }
    }

    fn next_id(products: &[Product]) -> i64 {
        products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> InventoryResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product> {
        let mut products = self.products.write().await;
        let product = Product::new(Self::next_id(&products), input);
        products.push(product.clone());

        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateProduct) -> InventoryResult<Product> {
        let mut products = self.products.write().await;
        let existing = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        existing.apply_update(input);

        tracing::info!(product_id = id, "Product updated");
        Ok(existing.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> InventoryResult<Product> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        let removed = products.remove(index);

        tracing::info!(product_id = id, "Product deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, sku: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            sku: sku.to_string(),
            price: 5.0,
            current_stock: 3,
            low_stock_threshold: 10,
        }
    }

    #[tokio::test]
    async fn test_first_id_is_one() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Widget", "WID-001")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_ids_are_max_plus_one() {
        let repo = InMemoryProductRepository::new();
        let a = repo.create(input("A", "SKU-A")).await.unwrap();
        let b = repo.create(input("B", "SKU-B")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // Deleting a non-max id must not affect the next assignment
        repo.delete(a.id).await.unwrap();
        let c = repo.create(input("C", "SKU-C")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Widget", "WID-001")).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.sku, "WID-001");
        assert_eq!(fetched.current_stock, 3);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update(42, UpdateProduct::default()).await;
        assert!(matches!(result, Err(InventoryError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_restamps_and_keeps_id() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Widget", "WID-001")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateProduct {
                    name: Some("Gadget".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.sku, created.sku);
        assert!(updated.last_updated >= created.last_updated);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Widget", "WID-001")).await.unwrap();

        let removed = repo.delete(created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        let again = repo.delete(created.id).await;
        assert!(matches!(again, Err(InventoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_seeded_catalog_ids_are_sequential() {
        let repo = InMemoryProductRepository::seeded();
        let products = repo.get_all().await.unwrap();

        assert!(!products.is_empty());
        for (i, product) in products.iter().enumerate() {
            assert_eq!(product.id, i as i64 + 1);
        }
    }
}
