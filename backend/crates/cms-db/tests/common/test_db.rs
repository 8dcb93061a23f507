use cms_core::BusinessUnit;
use cms_db::BusinessUnitRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    cms_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a business unit with a fixed id for foreign key constraints
pub async fn create_test_business_unit(pool: &SqlitePool, id: &str) -> BusinessUnit {
    let mut unit = BusinessUnit::new(format!("unit-{}", id), format!("Unit {}", id));
    unit.id = id.to_string();

    BusinessUnitRepository::new(pool.clone())
        .create(&unit)
        .await
        .expect("Failed to create test business unit");

    unit
}
