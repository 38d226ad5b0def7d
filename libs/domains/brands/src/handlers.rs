//! HTTP handlers for Brands API

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, UnsupportedMediaTypeResponse},
};
use utoipa::OpenApi;

use crate::error::BrandResult;
use crate::models::{Brand, CreateBrand};
use crate::service::BrandService;

pub const TAG: &str = "Brands";

/// OpenAPI documentation for Brands API
#[derive(OpenApi)]
#[openapi(
    paths(create_brand),
    components(
        schemas(Brand, CreateBrand),
        responses(BadRequestValidationResponse, UnsupportedMediaTypeResponse)
    ),
    tags(
        (name = TAG, description = "Brand endpoints")
    )
)]
pub struct ApiDoc;

/// Create the brand router
pub fn router(service: BrandService) -> Router {
    Router::new()
        .route("/", post(create_brand))
        .with_state(service)
}

/// Create a brand
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBrand,
    responses(
        (status = 201, description = "Brand accepted", body = Brand),
        (status = 400, response = BadRequestValidationResponse),
        (status = 415, response = UnsupportedMediaTypeResponse)
    )
)]
async fn create_brand(
    State(service): State<BrandService>,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> BrandResult<impl IntoResponse> {
    let brand = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}
