use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::Validation(errors) => AppError::ValidationError(errors),
            // The driver message is logged by AppError, never sent to the client
            ItemError::Database(err) => AppError::Database(err),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
