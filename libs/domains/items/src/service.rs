//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Turns missing rows into [`ItemError::NotFound`] and validates input before
/// it reaches the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Get an item by ID; soft-deleted items are returned too
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, include_deleted: bool) -> ItemResult<Vec<Item>> {
        self.repository
            .list(ItemFilter::with_deleted(include_deleted))
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_deleted_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list(ItemFilter::deleted()).await
    }

    #[instrument(skip(self))]
    pub async fn count_items(&self, include_deleted: bool) -> ItemResult<u64> {
        self.repository
            .count(ItemFilter::with_deleted(include_deleted))
            .await
    }

    /// Flag an item as deleted. Already-deleted items are returned unchanged.
    #[instrument(skip(self))]
    pub async fn soft_delete_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .mark_deleted(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Remove the row, whether or not it was soft-deleted first
    #[instrument(skip(self))]
    pub async fn hard_delete_item(&self, id: i32) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
