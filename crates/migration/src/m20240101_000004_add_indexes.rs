use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Supplies: listing deduplicates on (name, supply_category_id)
        manager
            .create_index(
                Index::create()
                    .name("idx_supply_name_category")
                    .table(Supply::Table)
                    .col(Supply::Name)
                    .col(Supply::SupplyCategoryId)
                    .to_owned(),
            )
            .await?;

        // ShelterSupply: aggregation joins on supply_id
        manager
            .create_index(
                Index::create()
                    .name("idx_shelter_supply_supply")
                    .table(ShelterSupply::Table)
                    .col(ShelterSupply::SupplyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_supply_name_category").table(Supply::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_shelter_supply_supply").table(ShelterSupply::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Supply {
    #[sea_orm(iden = "supplies")]
    Table,
    Name,
    SupplyCategoryId,
}

#[derive(DeriveIden)]
enum ShelterSupply {
    #[sea_orm(iden = "shelter_supplies")]
    Table,
    SupplyId,
}
