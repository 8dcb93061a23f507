//! Helpers shared by the tenant-scoped repositories.
//!
//! Mutations on tenant-owned rows always filter on `id AND business_unit_id`
//! in the same statement. A row that belongs to another unit is therefore
//! indistinguishable from a missing one: zero rows affected.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Delete one row from `table` owned by `business_unit_id`.
/// Returns `false` when nothing matched.
pub(crate) async fn delete_scoped(
    pool: &SqlitePool,
    table: &'static str,
    id: &str,
    business_unit_id: &str,
) -> DbErrorResult<bool> {
    let sql = format!("DELETE FROM {table} WHERE id = ? AND business_unit_id = ?");

    let result = sqlx::query(&sql)
        .bind(id)
        .bind(business_unit_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[track_caller]
pub(crate) fn timestamp(
    table: &'static str,
    column: &str,
    secs: i64,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::CorruptRow {
        table,
        message: format!("invalid timestamp in {}: {}", column, secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
