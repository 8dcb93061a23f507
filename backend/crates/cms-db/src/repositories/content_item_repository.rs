use crate::Result as DbErrorResult;
use crate::repositories::scoped::timestamp;

use cms_core::ContentItem;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "content_items";

pub struct ContentItemRepository {
    pool: SqlitePool,
}

impl ContentItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: &ContentItem) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO content_items (
                  id, business_unit_id, content_type, title, description, icon,
                  is_active, sort_order, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&item.id)
        .bind(&item.business_unit_id)
        .bind(&item.content_type)
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.icon)
        .bind(item.is_active)
        .bind(item.sort_order)
        .bind(item.created_at.timestamp())
        .bind(item.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Items of one type for one unit, ordered by sort order
    pub async fn find_by_business_unit(
        &self,
        business_unit_id: &str,
        content_type: &str,
    ) -> DbErrorResult<Vec<ContentItem>> {
        let rows = sqlx::query(
            r#"
              SELECT id, business_unit_id, content_type, title, description, icon,
                     is_active, sort_order, created_at, updated_at
              FROM content_items
              WHERE business_unit_id = ? AND content_type = ?
              ORDER BY sort_order ASC, created_at ASC
              "#,
        )
        .bind(business_unit_id)
        .bind(content_type)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    /// Delete an item of `content_type` owned by `business_unit_id`.
    /// Returns `false` when no row matched.
    pub async fn delete_scoped(
        &self,
        id: &str,
        business_unit_id: &str,
        content_type: &str,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              DELETE FROM content_items
              WHERE id = ? AND business_unit_id = ? AND content_type = ?
              "#,
        )
        .bind(id)
        .bind(business_unit_id)
        .bind(content_type)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(r: &SqliteRow) -> DbErrorResult<ContentItem> {
    Ok(ContentItem {
        id: r.try_get("id")?,
        business_unit_id: r.try_get("business_unit_id")?,
        content_type: r.try_get("content_type")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        icon: r.try_get("icon")?,
        is_active: r.try_get("is_active")?,
        sort_order: r.try_get("sort_order")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
