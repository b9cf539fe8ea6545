use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_auto(Items::Id))
                    .col(string_len(Items::Name, 255))
                    .col(text_null(Items::Description))
                    .col(
                        timestamp_with_time_zone(Items::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(boolean(Items::Deleted).default(false))
                    .to_owned(),
            )
            .await?;

        // Listing filters on the flag; audits sort by creation time.
        manager
            .create_index(
                Index::create()
                    .name("idx_items_deleted")
                    .table(Items::Table)
                    .col(Items::Deleted)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .col(Items::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    Deleted,
}
