use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckResult {
    /// `up` or `down`
    pub status: &'static str,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// `ready` or `not ready`
    pub status: &'static str,
    pub checks: BTreeMap<String, CheckResult>,
}

/// A named readiness probe.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs all checks concurrently; 200 when every check passes, 503 otherwise.
///
/// ```ignore
/// run_health_checks(vec![(
///     "database",
///     Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) }),
/// )])
/// .await
/// ```
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> Response {
    let timed = checks.into_iter().map(|(name, check)| async move {
        let start = Instant::now();
        let result = check.await;
        (name, result, start.elapsed().as_millis() as u64)
    });

    let mut all_up = true;
    let mut results = BTreeMap::new();
    for (name, result, latency_ms) in join_all(timed).await {
        let entry = match result {
            Ok(()) => CheckResult {
                status: "up",
                latency_ms,
                error: None,
            },
            Err(e) => {
                tracing::error!(check = name, error = %e, "Readiness check failed");
                all_up = false;
                CheckResult {
                    status: "down",
                    latency_ms,
                    error: Some(e),
                }
            }
        };
        results.insert(name.to_string(), entry);
    }

    let (status, label) = if all_up {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    };

    (
        status,
        Json(ReadyResponse {
            status: label,
            checks: results,
        }),
    )
        .into_response()
}

/// Liveness: 200 whenever the process can serve requests.
pub async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// `/health` bound to the given app metadata.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
