use crate::Result as DbErrorResult;
use crate::repositories::scoped::{delete_scoped, timestamp};

use cms_core::{Faq, FaqUpdate};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "faqs";

pub struct FaqRepository {
    pool: SqlitePool,
}

impl FaqRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, faq: &Faq) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO faqs (
                  id, business_unit_id, question, answer, category,
                  is_active, sort_order, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&faq.id)
        .bind(&faq.business_unit_id)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(&faq.category)
        .bind(faq.is_active)
        .bind(faq.sort_order)
        .bind(faq.created_at.timestamp())
        .bind(faq.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// FAQs of one unit, ordered by sort order
    pub async fn find_by_business_unit(&self, business_unit_id: &str) -> DbErrorResult<Vec<Faq>> {
        let rows = sqlx::query(
            r#"
              SELECT id, business_unit_id, question, answer, category,
                     is_active, sort_order, created_at, updated_at
              FROM faqs
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
    ) -> DbErrorResult<Option<Faq>> {
        let row = sqlx::query(
            r#"
              SELECT id, business_unit_id, question, answer, category,
                     is_active, sort_order, created_at, updated_at
              FROM faqs
              WHERE id = ? AND business_unit_id = ?
              "#,
        )
        .bind(id)
        .bind(business_unit_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Apply `changes` to the FAQ only if it belongs to `business_unit_id`.
    /// Returns the updated row, or `None` when no row matched.
    pub async fn update_scoped(
        &self,
        id: &str,
        business_unit_id: &str,
        changes: &FaqUpdate,
    ) -> DbErrorResult<Option<Faq>> {
        let row = sqlx::query(
            r#"
              UPDATE faqs
              SET question = COALESCE(?, question),
                  answer = COALESCE(?, answer),
                  category = COALESCE(?, category),
                  is_active = COALESCE(?, is_active),
                  sort_order = COALESCE(?, sort_order),
                  updated_at = ?
              WHERE id = ? AND business_unit_id = ?
              RETURNING id, business_unit_id, question, answer, category,
                        is_active, sort_order, created_at, updated_at
              "#,
        )
        .bind(&changes.question)
        .bind(&changes.answer)
        .bind(&changes.category)
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

fn map_row(r: &SqliteRow) -> DbErrorResult<Faq> {
    Ok(Faq {
        id: r.try_get("id")?,
        business_unit_id: r.try_get("business_unit_id")?,
        question: r.try_get("question")?,
        answer: r.try_get("answer")?,
        category: r.try_get("category")?,
        is_active: r.try_get("is_active")?,
        sort_order: r.try_get("sort_order")?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
