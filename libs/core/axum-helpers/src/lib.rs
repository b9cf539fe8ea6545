//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, health/readiness, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] and the standard error body
//! - **[`extractors`]**: JSON/path/query extractors that reject with [`AppError`]
//! - **[`audit`]**: audit trail events

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    CheckResult, HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{PathParam, QueryParams, ValidatedJson};

pub use audit::{AuditEvent, AuditOutcome, client_ip};
