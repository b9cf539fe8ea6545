use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select,
};
use std::sync::Arc;

use crate::{
    entity,
    error::ItemResult,
    models::{CreateItem, Item, ItemFilter},
    repository::ItemRepository,
};

#[derive(Clone)]
pub struct PgItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemRepository {
    /// Accepts an owned connection or an already shared `Arc`.
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn filtered(filter: ItemFilter) -> Select<entity::Entity> {
        let query = entity::Entity::find();
        match filter.deleted_value() {
            Some(deleted) => query.filter(entity::Column::Deleted.eq(deleted)),
            None => query,
        }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let models = Self::filtered(filter)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: ItemFilter) -> ItemResult<u64> {
        Ok(Self::filtered(filter).count(self.base.db()).await?)
    }

    // Single UPDATE ... RETURNING; re-marking a deleted row returns it as is.
    async fn mark_deleted(&self, id: i32) -> ItemResult<Option<Item>> {
        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            deleted: Set(true),
            ..Default::default()
        };

        match self.base.update(active_model).await {
            Ok(model) => {
                tracing::info!(item_id = id, "Soft-deleted item");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(item_id = id, "Hard-deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
