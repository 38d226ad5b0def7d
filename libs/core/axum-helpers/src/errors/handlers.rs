use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, ErrorResponse, error_response};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorResponse::new(
            ErrorCode::NotFound,
            "The requested resource was not found",
        ),
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorResponse::new(
            ErrorCode::MethodNotAllowed,
            ErrorCode::MethodNotAllowed.default_message(),
        ),
    )
}
