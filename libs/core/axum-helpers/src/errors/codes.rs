//! Error codes carried in every error body.
//!
//! Each code has a client-facing string (`"NOT_FOUND"`), an integer for logs
//! and dashboards (`1004`) and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationError,
    InvalidPathParam,
    JsonExtraction,
    NotFound,
    InvalidQuery,
    MethodNotAllowed,
    BadRequest,

    // Server errors (1500-1599)
    InternalError,
    ServiceUnavailable,
    NotImplemented,

    // Database errors (2000-2999)
    DatabaseError,
    DatabaseUnavailable,
    DatabaseNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidPathParam => "INVALID_PATH_PARAM",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
        }
    }

    /// Integer code for structured logs, grouped by range:
    /// 1000s client, 1500s server, 2000s database.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidPathParam => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InvalidQuery => 1005,
            Self::MethodNotAllowed => 1006,
            Self::BadRequest => 1007,

            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1501,
            Self::NotImplemented => 1502,

            Self::DatabaseError => 2001,
            Self::DatabaseUnavailable => 2002,
            Self::DatabaseNotFound => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidPathParam => "Invalid path parameter",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InvalidQuery => "Invalid query string",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::BadRequest => "Bad request",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::NotImplemented => "This endpoint is not implemented",
            Self::DatabaseError => "Database error occurred",
            Self::DatabaseUnavailable => "Database is unavailable",
            Self::DatabaseNotFound => "Database record not found",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 13] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidPathParam,
        ErrorCode::JsonExtraction,
        ErrorCode::NotFound,
        ErrorCode::InvalidQuery,
        ErrorCode::MethodNotAllowed,
        ErrorCode::BadRequest,
        ErrorCode::InternalError,
        ErrorCode::ServiceUnavailable,
        ErrorCode::NotImplemented,
        ErrorCode::DatabaseError,
        ErrorCode::DatabaseUnavailable,
        ErrorCode::DatabaseNotFound,
    ];

    #[test]
    fn test_serde_name_matches_as_str() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_integer_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.code()), "duplicate code for {code}");
        }
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(ErrorCode::NotImplemented.to_string(), "NOT_IMPLEMENTED");
        assert_eq!(ErrorCode::NotFound.default_message(), "Resource not found");
    }
}
