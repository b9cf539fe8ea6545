//! Placeholder for user management, which this service does not provide.

use axum::{Router, routing::get};
use axum_helpers::{AppError, errors::responses::NotImplementedResponse};

pub fn router() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
}

/// List users (not implemented)
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 501, response = NotImplementedResponse)
    )
)]
pub async fn list_users() -> Result<(), AppError> {
    Err(AppError::NotImplemented(
        "User management is not implemented".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_users_is_not_implemented() {
        for uri in ["/users", "/users/"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], "NOT_IMPLEMENTED");
        }
    }
}
