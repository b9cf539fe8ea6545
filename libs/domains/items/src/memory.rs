//! In-memory [`ItemRepository`] for local runs and hermetic tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemFilter};
use crate::repository::ItemRepository;

#[derive(Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

/// Mirrors the PostgreSQL semantics: ids start at 1 and are never reused,
/// even after a hard delete.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let item = Item {
            id: store.last_id,
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
            deleted: false,
        };
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        Ok(self.store.read().await.items.get(&id).cloned())
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: ItemFilter) -> ItemResult<u64> {
        let store = self.store.read().await;
        Ok(store.items.values().filter(|item| filter.matches(item)).count() as u64)
    }

    async fn mark_deleted(&self, id: i32) -> ItemResult<Option<Item>> {
        let mut store = self.store.write().await;
        Ok(store.items.get_mut(&id).map(|item| {
            item.deleted = true;
            item.clone()
        }))
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        Ok(self.store.write().await.items.remove(&id).is_some())
    }
}
