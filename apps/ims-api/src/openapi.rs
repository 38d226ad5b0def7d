use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "IMS Server API",
        version = "1.0",
        description = "Inventory Management System API documentation"
    ),
    nest(
        (path = domain_products::entity::Model::URL, api = domain_products::ApiDoc),
        (path = "/brands", api = domain_brands::ApiDoc)
    )
)]
pub struct ApiDoc;
