//! JSON body extractor that also runs `validator` rules.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the body as JSON, then validates it.
///
/// Malformed bodies are rejected with the status axum assigns (400, 415 or
/// 422); rule violations with 400 `VALIDATION_ERROR` and per-field details.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateItem>) -> impl IntoResponse { .. }
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, max = 5))]
        label: String,
    }

    async fn echo(ValidatedJson(p): ValidatedJson<Payload>) -> String {
        p.label
    }

    async fn send(body: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(echo));
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        assert_eq!(send(r#"{"label":"ok"}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        assert_eq!(send(r#"{"label":"too long"}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        assert_eq!(send(r#"{"label":"#).await, StatusCode::BAD_REQUEST);
    }
}
