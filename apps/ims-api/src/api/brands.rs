use axum::Router;
use domain_brands::{BrandService, handlers};

pub fn router() -> Router {
    handlers::router(BrandService::new())
}
