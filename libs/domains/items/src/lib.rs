//! Items Domain
//!
//! Named items with a soft-delete flag, stored in PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, OpenAPI docs, audit events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL / in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, CreateItem, ItemFilter
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, PgItemRepository};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let service = ItemService::new(PgItemRepository::new(db));
//! let routes = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreateItem, IncludeDeletedQuery, Item, ItemFilter};
pub use postgres::PgItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
