//! Create `shelter_supplies` table with FK to `supplies`.
//!
//! Join records linking a supply to a shelter-level need. This service only
//! reads them; writes happen elsewhere in the system.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShelterSupply::Table)
                    .if_not_exists()
                    .col(uuid(ShelterSupply::ShelterId).not_null())
                    .col(uuid(ShelterSupply::SupplyId).not_null())
                    .col(integer(ShelterSupply::Priority).not_null())
                    .col(timestamp_with_time_zone(ShelterSupply::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ShelterSupply::UpdatedAt).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_shelter_supplies")
                            .col(ShelterSupply::ShelterId)
                            .col(ShelterSupply::SupplyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shelter_supply_supply")
                            .from(ShelterSupply::Table, ShelterSupply::SupplyId)
                            .to(Supply::Table, Supply::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ShelterSupply::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ShelterSupply {
    #[sea_orm(iden = "shelter_supplies")]
    Table,
    ShelterId,
    SupplyId,
    Priority,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Supply {
    #[sea_orm(iden = "supplies")]
    Table,
    Id,
}
