use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Runs `SELECT 1` against the pool. Used by the readiness probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1");
    db.query_one(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL unreachable: {}", e)))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn one_row() -> Vec<BTreeMap<&'static str, Value>> {
        vec![BTreeMap::from([("?column?", Value::Int(Some(1)))])]
    }

    #[tokio::test]
    async fn test_check_health_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([one_row()])
            .into_connection();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_reports_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = check_health(&db).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
