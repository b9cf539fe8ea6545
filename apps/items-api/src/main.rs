use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use std::sync::Arc;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // A missing .env file is fine; real environment variables take precedence
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        database = %config.database.redacted_url(),
        "Starting"
    );

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState {
        config,
        db: Arc::new(db),
    };

    let api_routes = api::routes(&state).merge(health_router(state.config.app));
    let app = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;

    let AppState { config, db } = state;
    create_production_app(app, &config.server, async move {
        info!("Shutting down: closing database pool");
        // Handlers are gone once the server has drained, leaving this the only handle
        match Arc::try_unwrap(db) {
            Ok(db) => match db.close().await {
                Ok(()) => info!("Database pool closed"),
                Err(e) => tracing::warn!(error = %e, "Failed to close database pool"),
            },
            Err(db) => tracing::warn!(
                handles = Arc::strong_count(&db),
                "Database pool still shared, dropping without close"
            ),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
