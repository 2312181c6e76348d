use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::test_db;
use crate::{shelter_supply, supply, supply_category};

#[tokio::test]
async fn supply_category_create_and_find() -> Result<()> {
    let db = test_db().await?;

    let created = supply_category::create(&db, "Hygiene").await?;
    assert_eq!(created.name, "Hygiene");

    let found = supply_category::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Hygiene");

    let by_name = supply_category::Entity::find()
        .filter(supply_category::Column::Name.eq("Hygiene"))
        .one(&db)
        .await?;
    assert_eq!(by_name.unwrap().id, created.id);
    Ok(())
}

#[tokio::test]
async fn supply_category_rejects_blank_name() -> Result<()> {
    let db = test_db().await?;
    let err = supply_category::create(&db, "   ").await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn supply_insert_and_related_category() -> Result<()> {
    let db = test_db().await?;

    let cat = supply_category::create(&db, "Food").await?;
    let now = Utc::now();
    let created = supply::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Rice".into()),
        supply_category_id: Set(cat.id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let rows = supply::Entity::find()
        .find_also_related(supply_category::Entity)
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 1);
    let (s, c) = &rows[0];
    assert_eq!(s.id, created.id);
    assert_eq!(c.as_ref().unwrap().name, "Food");
    Ok(())
}

#[tokio::test]
async fn shelter_supply_composite_key_roundtrip() -> Result<()> {
    let db = test_db().await?;

    let cat = supply_category::create(&db, "Water").await?;
    let now = Utc::now();
    let s = supply::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Bottled water".into()),
        supply_category_id: Set(cat.id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let shelter_id = Uuid::new_v4();
    shelter_supply::ActiveModel {
        shelter_id: Set(shelter_id),
        supply_id: Set(s.id),
        priority: Set(10),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let found = shelter_supply::Entity::find_by_id((shelter_id, s.id)).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().priority, 10);
    Ok(())
}
