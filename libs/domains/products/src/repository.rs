use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations report a missing target row as [`StoreError::NotFound`]
/// and every other failure as [`StoreError::Other`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id
    async fn create(&self, input: CreateProduct) -> StoreResult<Product>;

    /// All products, ordered by id ascending
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Product>>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: i32, input: UpdateProduct) -> StoreResult<Product>;

    /// Delete a product and return the row as it was before deletion
    async fn delete(&self, id: i32) -> StoreResult<Product>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i32, Product>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, like a SERIAL column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> StoreResult<Product> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let product = Product {
            id,
            product_name: input.product_name,
        };
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> StoreResult<Product> {
        let mut store = self.store.write().await;

        let product = store.products.get_mut(&id).ok_or(StoreError::NotFound)?;
        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<Product> {
        let mut store = self.store.write().await;

        let product = store.products.remove(&id).ok_or(StoreError::NotFound)?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(product)
    }
}
