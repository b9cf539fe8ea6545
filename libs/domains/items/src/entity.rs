use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the `items` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.into(),
            deleted: model.deleted,
        }
    }
}

// id is left to the SERIAL sequence
impl From<crate::models::CreateItem> for ActiveModel {
    fn from(input: crate::models::CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(chrono::Utc::now().into()),
            deleted: Set(false),
        }
    }
}
