//! Generic single-entity persistence on top of SeaORM.
//!
//! Domain repositories wrap a [`BaseRepository`] for the primary-key
//! operations and build their own filtered queries against [`BaseRepository::db`].
//!
//! The connection is held behind an [`Arc`]: with SeaORM's `mock` feature
//! enabled `DatabaseConnection` is not `Clone`.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};
use std::marker::PhantomData;
use std::sync::Arc;

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub struct BaseRepository<E: EntityTrait> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// INSERT ... RETURNING, giving back the stored row with generated columns.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.db.as_ref()).await
    }

    pub async fn find_by_id<T>(&self, id: T) -> Result<Option<E::Model>, DbErr>
    where
        T: Into<PrimaryKeyOf<E>>,
    {
        E::find_by_id(id).one(self.db.as_ref()).await
    }

    /// UPDATE of the set columns only. Fails with [`DbErr::RecordNotUpdated`]
    /// when no row has the model's primary key.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(self.db.as_ref()).await
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id<T>(&self, id: T) -> Result<u64, DbErr>
    where
        T: Into<PrimaryKeyOf<E>>,
    {
        let result = E::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
