use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    QueryOrder, Set, Statement,
};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::{supply, supply_category};

/// Cap on the number of aggregation groups returned by `most_needed_supplies`.
pub const MOST_NEEDED_LIMIT: u32 = 100;

const MAX_NAME_LEN: usize = 128;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupplyInput {
    pub name: String,
    pub supply_category_id: Uuid,
}

impl CreateSupplyInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_name(&self.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSupplyInput {
    pub name: Option<String>,
    pub supply_category_id: Option<Uuid>,
}

impl UpdateSupplyInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.is_none() && self.supply_category_id.is_none() {
            return Err(ServiceError::Validation("no fields to update".into()));
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name required".into()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ServiceError::Validation("name too long (max 128)".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplySummary {
    pub id: Uuid,
    pub name: String,
    pub category: CategorySummary,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// One aggregation group from the most-needed query.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct MostNeededSupply {
    pub name: String,
    /// COUNT(*) is 64-bit; serialized as a string for JSON consumers.
    #[serde(serialize_with = "i64_as_string")]
    pub supply_count: i64,
    pub priority: i32,
    pub updated_at: DateTime<FixedOffset>,
}

fn i64_as_string<S: Serializer>(v: &i64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&v.to_string())
}

/// Create a supply. `created_at` and `updated_at` are both stamped at call time.
pub async fn store_supply(
    db: &DatabaseConnection,
    input: CreateSupplyInput,
) -> Result<supply::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = supply::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        supply_category_id: Set(input.supply_category_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Overwrite the provided fields of an existing supply and refresh `updated_at`.
pub async fn update_supply(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateSupplyInput,
) -> Result<(), ServiceError> {
    input.validate()?;
    let mut am: supply::ActiveModel = supply::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("supply"))?
        .into();
    if let Some(name) = input.name {
        am.name = Set(name);
    }
    if let Some(category_id) = input.supply_category_id {
        am.supply_category_id = Set(category_id);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// List supplies with their category, deduplicated by (name, category id) and
/// ordered by name descending. When duplicates exist the most recently updated
/// record is kept.
pub async fn list_supplies(db: &DatabaseConnection) -> Result<Vec<SupplySummary>, ServiceError> {
    let rows = supply::Entity::find()
        .find_also_related(supply_category::Entity)
        .order_by_desc(supply::Column::Name)
        .order_by_desc(supply::Column::UpdatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());
    for (s, category) in rows {
        if !seen.insert((s.name.clone(), s.supply_category_id)) {
            continue;
        }
        // FK guarantees the category row exists
        let category = category
            .ok_or_else(|| ServiceError::Db(format!("supply {} has no category row", s.id)))?;
        out.push(SupplySummary {
            id: s.id,
            name: s.name,
            category: CategorySummary { id: category.id, name: category.name },
            created_at: s.created_at,
            updated_at: s.updated_at,
        });
    }
    Ok(out)
}

/// Aggregate shelter demand per supply name: number of shelter-supply rows,
/// highest priority and most recent supply update per group, ordered by demand
/// and recency, capped at the top 100 groups.
pub async fn most_needed_supplies(
    db: &DatabaseConnection,
) -> Result<Vec<MostNeededSupply>, ServiceError> {
    let sql = format!(
        "SELECT \
            s.name, \
            COUNT(*) AS supply_count, \
            MAX(ss.priority) AS priority, \
            MAX(s.updated_at) AS updated_at \
         FROM supplies AS s \
         INNER JOIN shelter_supplies AS ss ON (ss.supply_id = s.id) \
         GROUP BY s.name \
         ORDER BY supply_count DESC, MAX(ss.updated_at) DESC \
         LIMIT {MOST_NEEDED_LIMIT}"
    );
    MostNeededSupply::find_by_statement(Statement::from_string(db.get_database_backend(), sql))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
