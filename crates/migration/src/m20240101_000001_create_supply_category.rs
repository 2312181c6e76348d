//! Create `supply_categories` table.
//!
//! Grouping classification for supplies; `supplies` references it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupplyCategory::Table)
                    .if_not_exists()
                    .col(uuid(SupplyCategory::Id).primary_key())
                    .col(string_len(SupplyCategory::Name, 128).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SupplyCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SupplyCategory {
    #[sea_orm(iden = "supply_categories")]
    Table,
    Id,
    Name,
}
