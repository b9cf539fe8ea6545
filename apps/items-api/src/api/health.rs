//! Readiness endpoint; liveness (`/health`) comes from `axum_helpers::health_router`.

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// 200 when PostgreSQL answers `SELECT 1`, 503 otherwise
async fn readiness_check(State(state): State<AppState>) -> Response {
    let database: HealthCheckFuture<'_> = Box::pin(async {
        database::postgres::check_health(&state.db)
            .await
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("database", database)]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::{ServerConfig, app_info};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(db: MockDatabase) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/items"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: Arc::new(db.into_connection()),
        }
    }

    async fn ready(db: MockDatabase) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
        let response = router(state(db)).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let row = BTreeMap::from([("?column?".to_string(), Value::Int(Some(1)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]);

        let (status, body) = ready(db).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["checks"]["database"]["status"], "up");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())]);

        let (status, body) = ready(db).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["checks"]["database"]["status"], "down");
    }
}
