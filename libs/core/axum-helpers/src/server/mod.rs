//! Router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &config.server, async move { db.close().await.ok(); }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{
    CheckResult, HealthCheckFuture, HealthResponse, ReadyResponse, health_router,
    run_health_checks,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
