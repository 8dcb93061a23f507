use crate::repositories::scoped::timestamp;
use crate::{DbError, Result as DbErrorResult};

use cms_core::WebsiteConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "website_configs";

pub struct WebsiteConfigRepository {
    pool: SqlitePool,
}

impl WebsiteConfigRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_business_unit(
        &self,
        business_unit_id: &str,
    ) -> DbErrorResult<Option<WebsiteConfig>> {
        let row = sqlx::query(
            r#"
              SELECT id, business_unit_id, site_name, tagline, logo_url,
                     primary_color, secondary_color, contact_email, contact_phone,
                     address, social_links, created_at, updated_at
              FROM website_configs
              WHERE business_unit_id = ?
              "#,
        )
        .bind(business_unit_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Insert the unit's configuration, or overwrite it if one exists.
    ///
    /// On conflict the stored `id` and `created_at` are kept. Returns the row
    /// as persisted.
    pub async fn upsert(&self, config: &WebsiteConfig) -> DbErrorResult<WebsiteConfig> {
        let social_links = serde_json::to_string(&config.social_links).map_err(|e| {
            DbError::CorruptRow {
                table: TABLE,
                message: format!("social_links not serializable: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let row = sqlx::query(
            r#"
              INSERT INTO website_configs (
                  id, business_unit_id, site_name, tagline, logo_url,
                  primary_color, secondary_color, contact_email, contact_phone,
                  address, social_links, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(business_unit_id) DO UPDATE SET
                  site_name = excluded.site_name,
                  tagline = excluded.tagline,
                  logo_url = excluded.logo_url,
                  primary_color = excluded.primary_color,
                  secondary_color = excluded.secondary_color,
                  contact_email = excluded.contact_email,
                  contact_phone = excluded.contact_phone,
                  address = excluded.address,
                  social_links = excluded.social_links,
                  updated_at = excluded.updated_at
              RETURNING id, business_unit_id, site_name, tagline, logo_url,
                        primary_color, secondary_color, contact_email, contact_phone,
                        address, social_links, created_at, updated_at
              "#,
        )
        .bind(&config.id)
        .bind(&config.business_unit_id)
        .bind(&config.site_name)
        .bind(&config.tagline)
        .bind(&config.logo_url)
        .bind(&config.primary_color)
        .bind(&config.secondary_color)
        .bind(&config.contact_email)
        .bind(&config.contact_phone)
        .bind(&config.address)
        .bind(social_links)
        .bind(config.created_at.timestamp())
        .bind(config.updated_at.timestamp())
        .fetch_one(&self.pool)
        .await?;

        map_row(&row)
    }
}

fn map_row(r: &SqliteRow) -> DbErrorResult<WebsiteConfig> {
    let social_links: String = r.try_get("social_links")?;

    Ok(WebsiteConfig {
        id: r.try_get("id")?,
        business_unit_id: r.try_get("business_unit_id")?,
        site_name: r.try_get("site_name")?,
        tagline: r.try_get("tagline")?,
        logo_url: r.try_get("logo_url")?,
        primary_color: r.try_get("primary_color")?,
        secondary_color: r.try_get("secondary_color")?,
        contact_email: r.try_get("contact_email")?,
        contact_phone: r.try_get("contact_phone")?,
        address: r.try_get("address")?,
        social_links: serde_json::from_str(&social_links).map_err(|e| DbError::CorruptRow {
            table: TABLE,
            message: format!("invalid social_links JSON: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: timestamp(TABLE, "created_at", r.try_get("created_at")?)?,
        updated_at: timestamp(TABLE, "updated_at", r.try_get("updated_at")?)?,
    })
}
