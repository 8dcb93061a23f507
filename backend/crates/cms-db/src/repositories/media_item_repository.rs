use crate::Result as DbErrorResult;
use crate::repositories::scoped::{delete_scoped, timestamp};

use cms_core::MediaItem;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "media_items";

pub struct MediaItemRepository {
    pool: SqlitePool,
}

impl MediaItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: &MediaItem) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO media_items (
                  id, business_unit_id, title, image_url, alt_text, category,
                  is_active, sort_order, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&item.id)
        .bind(&item.business_unit_id)
        .bind(&item.title)
        .bind(&item.image_url)
        .bind(&item.alt_text)
        .bind(&item.category)
        .bind(item.is_active)
        .bind(item.sort_order)
        .bind(item.created_at.timestamp())
        .bind(item.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_business_unit(
        &self,
        business_unit_id: &str,
    ) -> DbErrorResult<Vec<MediaItem>> {
        let rows = sqlx::query(
            r#"
              SELECT id, business_unit_id, title, image_url, alt_text, category,
                     is_active, sort_order, created_at, updated_at
              FROM media_items
              WHERE business_unit_id = ?
              ORDER BY sort_order ASC, created_at ASC
              "#,
        )
        .bind(business_unit_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete_scoped(&self, id: &str, business_unit_id: &str) -> DbErrorResult<bool> {
        delete_scoped(&self.pool, TABLE, id, business_unit_id).await
    }
}

fn map_row(r: &SqliteRow) -> DbErrorResult<MediaItem> {
    Ok(MediaItem {
        id: r.try_get("id")?,
        business_unit_id: r.try_get("business_unit_id")?,
        title: r.try_get("title")?,
        image_url: r.try_get("image_url")?,
        alt_text: r.try_get("alt_text")?,
        category: r.try_get("category")?,
        is_active: r.try_get("is_active")?,
        sort_order: r.try_get("sort_order")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
