use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{RetryConfig, retry_with_backoff};

/// Connect with the default pool settings from [`PostgresConfig`].
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(PostgresConfig::new(database_url)).await
}

pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let target = config.redacted_url();
    let db = connect_with_options(config.into_connect_options()).await?;
    info!(database = %target, "Connected to PostgreSQL");
    Ok(db)
}

pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    Database::connect(options).await
}

/// Connect, retrying with backoff while the database is unreachable.
///
/// Intended for startup, where the database container may still be booting.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let target = config.redacted_url();
    let options = config.into_connect_options();

    let db = retry_with_backoff(
        || connect_with_options(options.clone()),
        retry_config.unwrap_or_default(),
    )
    .await?;

    info!(database = %target, "Connected to PostgreSQL");
    Ok(db)
}

/// Apply all pending migrations of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    let pending = M::get_pending_migrations(db).await?.len();
    if pending == 0 {
        info!(app = app_name, "Database schema is up to date");
        return Ok(());
    }

    info!(app = app_name, pending, "Applying database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations applied");
    Ok(())
}
