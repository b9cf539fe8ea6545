//! PostgreSQL connectivity shared by the items service.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connector, migrations runner, health checks
//!   and [`BaseRepository`]
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config(PostgresConfig::new(url)).await?;
//! postgres::run_migrations::<Migrator>(&db, "items_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub mod repository;

pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
