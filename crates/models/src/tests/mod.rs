/// CRUD operations tests for all models
pub mod crud_tests;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database for a single test.
/// max_connections is pinned to 1 so every query sees the same SQLite memory db.
pub async fn test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = crate::db::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
