//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing CRUD operations
///
/// Ids arrive as raw path strings. The service parses them and turns a
/// missing row into [`ProductError::NotFound`]. Payloads are validated
/// before they get here.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

/// Strict base-10 `i32`; anything else never reaches the store.
///
/// The whole string must be a number. Unlike a lenient prefix parse,
/// `"1abc"` and `"1.5"` are rejected rather than read as `1`, so a
/// non-numeric id always fails with [`ProductError::InvalidIdentifier`].
fn parse_id(id: &str) -> ProductResult<i32> {
    id.parse::<i32>()
        .map_err(|_| ProductError::InvalidIdentifier(id.to_string()))
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(product_name = %input.product_name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        Ok(self.repository.create(input).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.repository.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: &str) -> ProductResult<Product> {
        let product_id = parse_id(id)?;

        self.repository
            .find_by_id(product_id)
            .await
            .map_err(|e| ProductError::from_store(e, id))?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let product_id = parse_id(id)?;

        self.repository
            .update(product_id, input)
            .await
            .map_err(|e| ProductError::from_store(e, id))
    }

    /// Delete a product, returning the deleted record
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> ProductResult<Product> {
        let product_id = parse_id(id)?;

        self.repository
            .delete(product_id)
            .await
            .map_err(|e| ProductError::from_store(e, id))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
