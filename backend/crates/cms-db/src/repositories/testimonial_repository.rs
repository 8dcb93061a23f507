use crate::Result as DbErrorResult;
use crate::repositories::scoped::{delete_scoped, timestamp};

use cms_core::Testimonial;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "testimonials";

pub struct TestimonialRepository {
    pool: SqlitePool,
}

impl TestimonialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, testimonial: &Testimonial) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO testimonials (
                  id, business_unit_id, author_name, author_title, content, rating,
                  is_active, sort_order, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&testimonial.id)
        .bind(&testimonial.business_unit_id)
        .bind(&testimonial.author_name)
        .bind(&testimonial.author_title)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(testimonial.is_active)
        .bind(testimonial.sort_order)
        .bind(testimonial.created_at.timestamp())
        .bind(testimonial.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_business_unit(
        &self,
        business_unit_id: &str,
    ) -> DbErrorResult<Vec<Testimonial>> {
        let rows = sqlx::query(
            r#"
              SELECT id, business_unit_id, author_name, author_title, content, rating,
                     is_active, sort_order, created_at, updated_at
              FROM testimonials
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
    ) -> DbErrorResult<Option<Testimonial>> {
        let row = sqlx::query(
            r#"
              SELECT id, business_unit_id, author_name, author_title, content, rating,
                     is_active, sort_order, created_at, updated_at
              FROM testimonials
              WHERE id = ? AND business_unit_id = ?
              "#,
        )
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

fn map_row(r: &SqliteRow) -> DbErrorResult<Testimonial> {
    Ok(Testimonial {
        id: r.try_get("id")?,
        business_unit_id: r.try_get("business_unit_id")?,
        author_name: r.try_get("author_name")?,
        author_title: r.try_get("author_title")?,
        content: r.try_get("content")?,
        rating: r.try_get("rating")?,
        is_active: r.try_get("is_active")?,
        sort_order: r.try_get("sort_order")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
