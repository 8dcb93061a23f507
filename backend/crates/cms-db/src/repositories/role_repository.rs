use crate::Result as DbErrorResult;
use crate::repositories::scoped::timestamp;

use cms_core::Role;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "roles";

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, role: &Role) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO roles (id, name, display_name, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&role.id)
        .bind(&role.name)
        .bind(&role.display_name)
        .bind(role.created_at.timestamp())
        .bind(role.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All roles, ordered by display name
    pub async fn find_all(&self) -> DbErrorResult<Vec<Role>> {
        let rows = sqlx::query(
            r#"
              SELECT id, name, display_name, created_at, updated_at
              FROM roles
              ORDER BY display_name ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }
}

fn map_row(r: &SqliteRow) -> DbErrorResult<Role> {
    Ok(Role {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        display_name: r.try_get("display_name")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
