//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::body::{Body, to_bytes};
use axum::extract::{FromRequest, Json, Request};
use axum::http::header;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body and runs the `validator` crate's `Validate` trait.
/// Unknown fields are ignored by serde, so only declared fields reach the handler.
///
/// Rejections are [`AppError`]s:
/// - missing `Content-Type: application/json` → 415
/// - malformed JSON or wrong field types → 400
/// - failed validation → 400 with per-field details
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1))]
///     product_name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating product: {}", payload.product_name)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

/// Largest body [`ValidatedJsonOrDefault`] buffers, matching axum's default body limit
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// [`ValidatedJson`] for shapes where every field is optional.
///
/// A request with no `Content-Type` and an empty body yields `T::default()`.
/// A non-empty body still needs `Content-Type: application/json` (415 otherwise),
/// and a body over 2 MiB is rejected with 400.
///
/// ```ignore
/// async fn update(
///     Path(id): Path<String>,
///     ValidatedJsonOrDefault(patch): ValidatedJsonOrDefault<UpdateProduct>,
/// ) -> ProductResult<Json<Product>> { ... }
/// ```
pub struct ValidatedJsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJsonOrDefault<T>
where
    T: DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let ValidatedJson(data) = ValidatedJson::<T>::from_request(req, state).await?;
            return Ok(Self(data));
        }

        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        // Content without a content type gets the regular JSON rejection
        let req = Request::from_parts(parts, Body::from(bytes));
        let ValidatedJson(data) = ValidatedJson::<T>::from_request(req, state).await?;
        Ok(Self(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::{patch, post},
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        name: String,
    }

    async fn echo(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.name
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    fn json_request(body: &'static str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body_and_ignores_unknown_fields() {
        let response = app()
            .oneshot(json_request(r#"{"name":"Desk","extra":true}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_empty_field() {
        let response = app().oneshot(json_request(r#"{"name":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_wrong_type_with_bad_request() {
        let response = app().oneshot(json_request(r#"{"name":5}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let response = app().oneshot(json_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"Desk"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[derive(Default, Deserialize, Validate)]
    struct Patch {
        #[validate(length(min = 1))]
        name: Option<String>,
    }

    async fn describe(ValidatedJsonOrDefault(patch): ValidatedJsonOrDefault<Patch>) -> String {
        patch.name.unwrap_or_else(|| "unchanged".to_string())
    }

    fn patch_app() -> Router {
        Router::new().route("/", patch(describe))
    }

    async fn text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_or_default_empty_body_without_content_type_is_default() {
        let request = HttpRequest::builder()
            .method("PATCH")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = patch_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "unchanged");
    }

    #[tokio::test]
    async fn test_or_default_reads_json_body() {
        let request = HttpRequest::builder()
            .method("PATCH")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Desk"}"#))
            .unwrap();

        let response = patch_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "Desk");
    }

    #[tokio::test]
    async fn test_or_default_still_validates() {
        let request = HttpRequest::builder()
            .method("PATCH")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":""}"#))
            .unwrap();

        let response = patch_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_or_default_content_without_content_type_is_unsupported_media_type() {
        let request = HttpRequest::builder()
            .method("PATCH")
            .uri("/")
            .body(Body::from(r#"{"name":"Desk"}"#))
            .unwrap();

        let response = patch_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_or_default_oversized_body_is_bad_request() {
        let request = HttpRequest::builder()
            .method("PATCH")
            .uri("/")
            .body(Body::from(vec![b'a'; MAX_BODY_BYTES + 1]))
            .unwrap();

        let response = patch_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "BAD_REQUEST");
    }
}
