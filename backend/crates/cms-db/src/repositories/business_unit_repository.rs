use crate::Result as DbErrorResult;
use crate::repositories::scoped::timestamp;

use cms_core::BusinessUnit;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "business_units";

pub struct BusinessUnitRepository {
    pool: SqlitePool,
}

impl BusinessUnitRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, unit: &BusinessUnit) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO business_units (id, name, display_name, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&unit.id)
        .bind(&unit.name)
        .bind(&unit.display_name)
        .bind(unit.created_at.timestamp())
        .bind(unit.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<BusinessUnit>> {
        let row = sqlx::query(
            r#"
              SELECT id, name, display_name, created_at, updated_at
              FROM business_units
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// All units, ordered by display name
    pub async fn find_all(&self) -> DbErrorResult<Vec<BusinessUnit>> {
        let rows = sqlx::query(
            r#"
              SELECT id, name, display_name, created_at, updated_at
              FROM business_units
              ORDER BY display_name ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }
}

fn map_row(r: &SqliteRow) -> DbErrorResult<BusinessUnit> {
    Ok(BusinessUnit {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        display_name: r.try_get("display_name")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
