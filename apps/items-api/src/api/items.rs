//! Items API routes
//!
//! Wires the items domain to the shared database pool.

use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgItemRepository::new(Arc::clone(&state.db));
    let service = ItemService::new(repository);

    handlers::router(service)
}
