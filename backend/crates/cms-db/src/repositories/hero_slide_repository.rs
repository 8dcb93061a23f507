use crate::Result as DbErrorResult;
use crate::repositories::scoped::{delete_scoped, timestamp};

use cms_core::{HeroSlide, HeroSlideUpdate};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "hero_slides";

pub struct HeroSlideRepository {
    pool: SqlitePool,
}

impl HeroSlideRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, slide: &HeroSlide) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO hero_slides (
                  id, business_unit_id, title, subtitle, image_url, cta_text, cta_link,
                  is_active, sort_order, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&slide.id)
        .bind(&slide.business_unit_id)
        .bind(&slide.title)
        .bind(&slide.subtitle)
        .bind(&slide.image_url)
        .bind(&slide.cta_text)
        .bind(&slide.cta_link)
        .bind(slide.is_active)
        .bind(slide.sort_order)
        .bind(slide.created_at.timestamp())
        .bind(slide.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_business_unit(
        &self,
        business_unit_id: &str,
    ) -> DbErrorResult<Vec<HeroSlide>> {
        let rows = sqlx::query(
            r#"
              SELECT id, business_unit_id, title, subtitle, image_url, cta_text, cta_link,
                     is_active, sort_order, created_at, updated_at
              FROM hero_slides
              WHERE business_unit_id = ?
              ORDER BY sort_order ASC, created_at ASC
              "#,
        )
        .bind(business_unit_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn find_scoped(
        &self,
        id: &str,
        business_unit_id: &str,
    ) -> DbErrorResult<Option<HeroSlide>> {
        let row = sqlx::query(
            r#"
              SELECT id, business_unit_id, title, subtitle, image_url, cta_text, cta_link,
                     is_active, sort_order, created_at, updated_at
              FROM hero_slides
              WHERE id = ? AND business_unit_id = ?
              "#,
        )
        .bind(id)
        .bind(business_unit_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Apply `changes` to the slide only if it belongs to `business_unit_id`.
    /// Returns the updated row, or `None` when no row matched.
    pub async fn update_scoped(
        &self,
        id: &str,
        business_unit_id: &str,
        changes: &HeroSlideUpdate,
    ) -> DbErrorResult<Option<HeroSlide>> {
        let row = sqlx::query(
            r#"
              UPDATE hero_slides
              SET title = COALESCE(?, title),
                  subtitle = COALESCE(?, subtitle),
                  image_url = COALESCE(?, image_url),
                  cta_text = COALESCE(?, cta_text),
                  cta_link = COALESCE(?, cta_link),
                  is_active = COALESCE(?, is_active),
                  sort_order = COALESCE(?, sort_order),
                  updated_at = ?
              WHERE id = ? AND business_unit_id = ?
              RETURNING id, business_unit_id, title, subtitle, image_url, cta_text, cta_link,
                        is_active, sort_order, created_at, updated_at
              "#,
        )
        .bind(&changes.title)
        .bind(&changes.subtitle)
        .bind(&changes.image_url)
        .bind(&changes.cta_text)
        .bind(&changes.cta_link)
        .bind(changes.is_active)
        .bind(changes.sort_order)
        .bind(Utc::now().timestamp())
        .bind(id)
        .bind(business_unit_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn delete_scoped(&self, id: &str, business_unit_id: &str) -> DbErrorResult<bool> {
        delete_scoped(&self.pool, TABLE, id, business_unit_id).await
    }
}

fn map_row(r: &SqliteRow) -> DbErrorResult<HeroSlide> {
    Ok(HeroSlide {
        id: r.try_get("id")?,
        business_unit_id: r.try_get("business_unit_id")?,
        title: r.try_get("title")?,
        subtitle: r.try_get("subtitle")?,
        image_url: r.try_get("image_url")?,
        cta_text: r.try_get("cta_text")?,
        cta_link: r.try_get("cta_link")?,
        is_active: r.try_get("is_active")?,
        sort_order: r.try_get("sort_order")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
