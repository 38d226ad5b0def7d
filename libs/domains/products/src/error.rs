use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Path id is not a base-10 `i32`
    #[error("Invalid product ID: {0}")]
    InvalidIdentifier(String),

    /// Carries the id exactly as the caller sent it
    #[error("Product with ID {0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Store(DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Failures reported by a [`ProductRepository`](crate::repository::ProductRepository).
///
/// `NotFound` means the targeted row does not exist; everything else is opaque.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Other(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl ProductError {
    /// Translate a store failure for the operation that targeted `id`
    pub fn from_store(err: StoreError, id: &str) -> Self {
        match err {
            StoreError::NotFound => ProductError::NotFound(id.to_string()),
            StoreError::Other(e) => ProductError::Store(e),
        }
    }
}

/// For operations without a target id, where a missing row is not expected
impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => {
                ProductError::Store(DbErr::RecordNotFound("products".to_string()))
            }
            StoreError::Other(e) => ProductError::Store(e),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidIdentifier(_) | ProductError::NotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            ProductError::Store(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
