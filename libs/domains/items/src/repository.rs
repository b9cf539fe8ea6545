use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemFilter};

/// Repository trait for Item persistence
///
/// Implementations: [`PgItemRepository`](crate::PgItemRepository) for
/// PostgreSQL and [`InMemoryItemRepository`](crate::InMemoryItemRepository)
/// for local runs and tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new live item and return it with its assigned id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID, whatever its deleted flag
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// List items matching the filter in ascending id order
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;

    async fn count(&self, filter: ItemFilter) -> ItemResult<u64>;

    /// Set the deleted flag; `None` when no row has this id
    async fn mark_deleted(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Physically remove the row; `false` when no row has this id
    async fn delete(&self, id: i32) -> ItemResult<bool>;
}
