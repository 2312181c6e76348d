//! Create `supplies` table with FK to `supply_categories`.
//!
//! Tracked item categories; created once, updated in place, never deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supply::Table)
                    .if_not_exists()
                    .col(uuid(Supply::Id).primary_key())
                    .col(string_len(Supply::Name, 128).not_null())
                    .col(uuid(Supply::SupplyCategoryId).not_null())
                    .col(timestamp_with_time_zone(Supply::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Supply::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supply_category")
                            .from(Supply::Table, Supply::SupplyCategoryId)
                            .to(SupplyCategory::Table, SupplyCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Supply::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Supply {
    #[sea_orm(iden = "supplies")]
    Table,
    Id,
    Name,
    SupplyCategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SupplyCategory {
    #[sea_orm(iden = "supply_categories")]
    Table,
    Id,
}
