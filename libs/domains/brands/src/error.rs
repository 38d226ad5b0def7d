use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type BrandResult<T> = Result<T, BrandError>;

/// Convert BrandError to AppError for standardized error responses
impl From<BrandError> for AppError {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::Validation(e) => AppError::ValidationError(e),
        }
    }
}

impl IntoResponse for BrandError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
