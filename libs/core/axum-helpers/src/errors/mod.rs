pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Item 999 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details, e.g. per-field validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error type returned by handlers; renders as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path parameter error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Query string error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Not Implemented: {0}")]
    NotImplemented(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::PathRejection(_)
            | AppError::QueryRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(e) => db_error_code(e).1,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::PathRejection(_) => ErrorCode::InvalidPathParam,
            AppError::QueryRejection(_) => ErrorCode::InvalidQuery,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::Database(e) => db_error_code(e).0,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
            AppError::NotImplemented(_) => ErrorCode::NotImplemented,
        }
    }

    fn into_body(self) -> ErrorResponse {
        let code = self.error_code();
        match self {
            AppError::JsonExtractorRejection(e) => ErrorResponse::new(code, e.body_text()),
            AppError::PathRejection(e) => ErrorResponse::new(code, e.body_text()),
            AppError::QueryRejection(e) => ErrorResponse::new(code, e.body_text()),
            AppError::ValidationError(e) => {
                let details = serde_json::to_value(&e).unwrap_or(Value::Null);
                ErrorResponse::from_code(code).with_details(details)
            }
            // Driver messages can leak schema details; keep them in logs only.
            AppError::Database(_) => ErrorResponse::from_code(code),
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg)
            | AppError::ServiceUnavailable(msg)
            | AppError::NotImplemented(msg) => ErrorResponse::new(code, msg),
        }
    }
}

fn db_error_code(error: &DbErr) -> (ErrorCode, StatusCode) {
    match error {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            (ErrorCode::DatabaseUnavailable, StatusCode::SERVICE_UNAVAILABLE)
        }
        DbErr::RecordNotFound(_) => (ErrorCode::DatabaseNotFound, StatusCode::NOT_FOUND),
        _ => (ErrorCode::DatabaseError, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.into_body())).into_response()
    }
}

pub fn error_response(status: StatusCode, error_code: ErrorCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(error_code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn body_of(error: AppError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_of(AppError::NotFound("Item 7 not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Item 7 not found");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_details() {
        let errors = Named { name: String::new() }.validate().unwrap_err();
        let (status, body) = body_of(AppError::ValidationError(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert!(body.details.unwrap().get("name").is_some());
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_message() {
        let (status, body) =
            body_of(AppError::Database(DbErr::Custom("relation \"items\" does not exist".into()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "DATABASE_ERROR");
        assert!(!body.message.contains("relation"));
    }

    #[tokio::test]
    async fn test_record_not_found_maps_to_404() {
        let (status, body) = body_of(AppError::Database(DbErr::RecordNotFound("items".into()))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "DATABASE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_not_implemented() {
        let (status, body) = body_of(AppError::NotImplemented("Users are not available".into())).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body.code, ErrorCode::NotImplemented.code());
    }
}
