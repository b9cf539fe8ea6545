use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use super::{ErrorCode, error_response};

/// Router fallback for unknown paths.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        format!("No route for {}", uri.path()),
    )
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed,
        ErrorCode::MethodNotAllowed.default_message(),
    )
}
