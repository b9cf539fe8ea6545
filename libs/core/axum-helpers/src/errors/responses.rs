//! Reusable OpenAPI responses, referenced from `#[utoipa::path]` as
//! `(status = 404, response = NotFoundResponse)`.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed path parameter",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_PATH_PARAM",
        "message": "Cannot parse `abc` to a `i32`"
    })
)]
pub struct BadRequestPathResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Item 999 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "DATABASE_ERROR",
        "message": "Database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Implemented",
    content_type = "application/json",
    example = json!({
        "code": 1502,
        "error": "NOT_IMPLEMENTED",
        "message": "This endpoint is not implemented"
    })
)]
pub struct NotImplementedResponse(pub ErrorResponse);
