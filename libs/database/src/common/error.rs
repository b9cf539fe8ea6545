/// Error type for connection management, migrations and health checks.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
