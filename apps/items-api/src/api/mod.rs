//! API routes module
//!
//! Routes are mounted at the root: `/items/...`, `/users/` and `/ready`.

pub mod health;
pub mod items;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(users::router())
        .merge(health::router(state.clone()))
}
