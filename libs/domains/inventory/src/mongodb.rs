//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, Database, IndexModel};
use tracing::instrument;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
///
/// Documents live in the `products` collection keyed by the `id` field
/// (unique index); MongoDB keeps its own `_id`. The stored field names are
/// the wire names of the entity (`currentStock`, `lastUpdated`, ...).
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> InventoryResult<()> {
        let indexes = vec![
            // Unique product id
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_id_unique".to_string())
                        .build(),
                )
                .build(),
            // Search keys; sku is intentionally NOT unique
            IndexModel::builder()
                .keys(doc! { "sku": 1 })
                .options(IndexOptions::builder().name("idx_sku".to_string()).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
            // Stock level queries
            IndexModel::builder()
                .keys(doc! { "currentStock": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_current_stock".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Highest id currently stored, 0 for an empty collection
    async fn max_id(&self) -> InventoryResult<i64> {
        let options = mongodb::options::FindOneOptions::builder()
            .sort(doc! { "id": -1 })
            .build();

        let top = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;
        Ok(top.map(|p| p.id).unwrap_or(0))
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> InventoryResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        // id ascending is creation order
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "id": 1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product> {
        let next_id = self.max_id().await? + 1;
        let product = Product::new(next_id, input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateProduct) -> InventoryResult<Product> {
        let filter = doc! { "id": id };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(InventoryError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(product_id = id, "Product updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> InventoryResult<Product> {
        let removed = self
            .collection
            .find_one_and_delete(doc! { "id": id })
            .await?
            .ok_or(InventoryError::NotFound(id))?;

        tracing::info!(product_id = id, "Product deleted successfully");
        Ok(removed)
    }
}
