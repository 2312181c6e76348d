use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::supply_category;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub supply_category_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SupplyCategory,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SupplyCategory => Entity::belongs_to(supply_category::Entity)
                .from(Column::SupplyCategoryId)
                .to(supply_category::Column::Id)
                .into(),
        }
    }
}

impl Related<supply_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
