use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{StoreError, StoreResult},
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL-backed product repository
///
/// Holds a clone of the shared connection pool.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> StoreResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> StoreResult<Product> {
        // Nothing to write; still report a missing row
        let Some(product_name) = input.product_name else {
            return self.find_by_id(id).await?.ok_or(StoreError::NotFound);
        };

        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            product_name: Set(product_name),
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StoreError::NotFound,
            other => StoreError::Other(other),
        })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> StoreResult<Product> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound)?;

        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        tracing::info!(product_id = id, "Deleted product");
        Ok(model.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str) -> entity::Model {
        entity::Model {
            id,
            product_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo
            .create(CreateProduct {
                product_name: "Widget".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.product_name, "Widget");
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Widget"), model(2, "Gadget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.find_all().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].product_name, "Gadget");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo
            .update(
                99,
                UpdateProduct {
                    product_name: Some("Gadget".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Gadget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo
            .update(
                1,
                UpdateProduct {
                    product_name: Some("Gadget".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(product.product_name, "Gadget");
    }

    #[tokio::test]
    async fn test_empty_update_reads_current_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.update(1, UpdateProduct::default()).await.unwrap();
        assert_eq!(product.product_name, "Widget");
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Widget")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.delete(1).await.unwrap();
        assert_eq!(product.id, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(matches!(repo.delete(99).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_query_failure_is_opaque() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(matches!(repo.find_all().await, Err(StoreError::Other(_))));
    }
}
