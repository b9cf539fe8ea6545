//! Shared application state passed to the route builders.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Cloned per router; the connection is shared, not copied.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SeaORM connection pool shared by every repository
    pub db: Arc<DatabaseConnection>,
}
