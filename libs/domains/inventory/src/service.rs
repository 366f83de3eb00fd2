//! Inventory Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreateProduct, Product, StockAdjustment, StockDirection, UpdateProduct};
use crate::repository::ProductRepository;

/// Inventory service providing business logic operations
///
/// The service layer handles validation, the stock adjustment rules, and
/// orchestrates repository operations. It is the only place the clamped
/// stock computation lives; callers never compute new stock themselves.
pub struct InventoryService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> InventoryService<R> {
    /// Create a new InventoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Full snapshot of the catalog
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> InventoryResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> InventoryResult<Product> {
        // Validate input
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> InventoryResult<Product> {
        // Validate input
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> InventoryResult<Product> {
        self.repository.delete(id).await
    }

    /// Adjust stock up or down
    ///
    /// Subtracting more than the available stock is not an error: the new
    /// stock is clamped at zero. A non-positive amount is rejected before
    /// the store is touched.
    #[instrument(
        skip(self, adjustment),
        fields(direction = %adjustment.direction, amount = adjustment.amount)
    )]
    pub async fn adjust_stock(
        &self,
        id: i64,
        adjustment: StockAdjustment,
    ) -> InventoryResult<Product> {
        if adjustment.amount <= 0 {
            return Err(InventoryError::InvalidAmount(adjustment.amount));
        }

        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::NotFound(id))?;

        let new_stock = match adjustment.direction {
            StockDirection::Add => product.current_stock + adjustment.amount,
            StockDirection::Subtract => (product.current_stock - adjustment.amount).max(0),
        };

        if let Some(ref notes) = adjustment.notes {
            tracing::info!(product_id = id, notes = %notes, "Stock adjustment note");
        }

        let update = UpdateProduct {
            current_stock: Some(new_stock),
            ..Default::default()
        };
        let updated = self.repository.update(id, update).await?;

        tracing::info!(product_id = id, new_stock, "Stock adjusted");
        Ok(updated)
    }
}

impl<R: ProductRepository> Clone for InventoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;

    fn sample_product(id: i64, stock: i64, threshold: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            sku: format!("SKU-{:04}", id),
            price: 9.99,
            current_stock: stock,
            low_stock_threshold: threshold,
            last_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_adjust_stock_add() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(1))
            .returning(|_| Ok(Some(sample_product(1, 5, 10))));

        // The repo must receive exactly the computed stock
        mock_repo
            .expect_update()
            .withf(|id, update| *id == 1 && update.current_stock == Some(12))
            .returning(|id, update| {
                let mut product = sample_product(id, 5, 10);
                product.apply_update(update);
                Ok(product)
            });

        let service = InventoryService::new(mock_repo);
        let product = service
            .adjust_stock(
                1,
                StockAdjustment {
                    direction: StockDirection::Add,
                    amount: 7,
                    notes: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(product.current_stock, 12);
    }

    #[tokio::test]
    async fn test_adjust_stock_subtract_clamps_at_zero() {
        let mut mock_repo = MockProductRepository::new();

        // Product has 3 units; subtracting 10 must truncate to 0
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(1))
            .returning(|_| Ok(Some(sample_product(1, 3, 10))));

        mock_repo
            .expect_update()
            .withf(|id, update| *id == 1 && update.current_stock == Some(0))
            .returning(|id, update| {
                let mut product = sample_product(id, 3, 10);
                product.apply_update(update);
                Ok(product)
            });

        let service = InventoryService::new(mock_repo);
        let product = service
            .adjust_stock(
                1,
                StockAdjustment {
                    direction: StockDirection::Subtract,
                    amount: 10,
                    notes: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(product.current_stock, 0);
    }

    #[tokio::test]
    async fn test_adjust_stock_subtract_exact() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(1))
            .returning(|_| Ok(Some(sample_product(1, 10, 10))));

        mock_repo
            .expect_update()
            .withf(|id, update| *id == 1 && update.current_stock == Some(4))
            .returning(|id, update| {
                let mut product = sample_product(id, 10, 10);
                product.apply_update(update);
                Ok(product)
            });

        let service = InventoryService::new(mock_repo);
        let product = service
            .adjust_stock(
                1,
                StockAdjustment {
                    direction: StockDirection::Subtract,
                    amount: 6,
                    notes: Some("cycle count".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(product.current_stock, 4);
    }

    #[tokio::test]
    async fn test_adjust_stock_rejects_zero_amount() {
        // No expectations: the amount check must run before any store access
        let mock_repo = MockProductRepository::new();

        let service = InventoryService::new(mock_repo);
        let result = service
            .adjust_stock(
                1,
                StockAdjustment {
                    direction: StockDirection::Add,
                    amount: 0,
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::InvalidAmount(0))));
    }

    #[tokio::test]
    async fn test_adjust_stock_rejects_negative_amount() {
        let mock_repo = MockProductRepository::new();

        let service = InventoryService::new(mock_repo);
        let result = service
            .adjust_stock(
                1,
                StockAdjustment {
                    direction: StockDirection::Subtract,
                    amount: -5,
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::InvalidAmount(-5))));
    }

    #[tokio::test]
    async fn test_adjust_stock_missing_product() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(42))
            .returning(|_| Ok(None));

        let service = InventoryService::new(mock_repo);
        let result = service
            .adjust_stock(
                42,
                StockAdjustment {
                    direction: StockDirection::Add,
                    amount: 1,
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_get_product_maps_missing_to_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(999))
            .returning(|_| Ok(None));

        let service = InventoryService::new(mock_repo);
        let result = service.get_product(999).await;

        assert!(matches!(result, Err(InventoryError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_create_product_rejects_empty_name() {
        // Validation fails before the repository sees anything
        let mock_repo = MockProductRepository::new();

        let service = InventoryService::new(mock_repo);
        let result = service
            .create_product(CreateProduct {
                name: String::new(),
                sku: "SKU-1".to_string(),
                price: 1.0,
                current_stock: 0,
                low_stock_threshold: 10,
            })
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_product_rejects_negative_price() {
        let mock_repo = MockProductRepository::new();

        let service = InventoryService::new(mock_repo);
        let result = service
            .create_product(CreateProduct {
                name: "Widget".to_string(),
                sku: "SKU-1".to_string(),
                price: -0.01,
                current_stock: 0,
                low_stock_threshold: 10,
            })
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_product_rejects_negative_stock() {
        let mock_repo = MockProductRepository::new();

        let service = InventoryService::new(mock_repo);
        let result = service
            .update_product(
                1,
                UpdateProduct {
                    current_stock: Some(-1),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }
}
