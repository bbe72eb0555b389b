//! Generic ownership-scoped repository.
//!
//! One implementation of find/list/update/delete shared by every
//! [`ResourceKind`]. Table, parent column, ownership join and writable
//! columns all come from the static schema table in `quillboard_core`;
//! no identifier in the generated SQL originates from a client.

use quillboard_core::resource::{OwnershipPath, Projection, ResourceKind};
use quillboard_core::types::DbId;
use serde_json::{Map, Value};
use sqlx::PgPool;

/// A storage-form row (snake_case keys) as produced by `to_jsonb`.
pub type Row = Map<String, Value>;

/// `FROM ... WHERE ...` fragment selecting row `$1` aliased `r`, visible
/// only when its ownership chain ends at user `$2`.
pub(crate) fn owned_source(kind: ResourceKind) -> String {
    let table = kind.table();
    match kind.ownership() {
        OwnershipPath::Direct => {
            format!("{table} r WHERE r.id = $1 AND r.user_id = $2")
        }
        OwnershipPath::ViaBook => format!(
            "{table} r
             JOIN books b ON b.id = r.book_id
             WHERE r.id = $1 AND b.user_id = $2"
        ),
        OwnershipPath::ViaChapter => format!(
            "{table} r
             JOIN chapters c ON c.id = r.chapter_id
             JOIN books b ON b.id = c.book_id
             WHERE r.id = $1 AND b.user_id = $2"
        ),
    }
}

fn into_row(value: Value) -> Option<Row> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Ownership-scoped reads and writes for any resource kind.
pub struct ScopedRepo;

impl ScopedRepo {
    /// Resolve a record through its ownership chain.
    ///
    /// Returns `None` both when the record does not exist and when it
    /// belongs to another user.
    pub async fn find_owned(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<Row>, sqlx::Error> {
        let query = format!("SELECT to_jsonb(r) FROM {}", owned_source(kind));
        let row = sqlx::query_scalar::<_, Value>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.and_then(into_row))
    }

    /// Ownership check without fetching the row.
    pub async fn is_owned(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
        user_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS (SELECT 1 FROM {})", owned_source(kind));
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// List the siblings under a parent in their natural order.
    ///
    /// The caller is responsible for checking ownership of the parent.
    /// Kinds without a parent column yield an empty list.
    pub async fn list_by_parent(
        pool: &PgPool,
        kind: ResourceKind,
        parent_id: DbId,
    ) -> Result<Vec<Row>, sqlx::Error> {
        let Some(parent) = kind.parent_column() else {
            return Ok(Vec::new());
        };
        let query = format!(
            "SELECT to_jsonb(r) FROM {table} r WHERE r.{parent} = $1 ORDER BY {order}",
            table = kind.table(),
            order = kind.list_order(),
        );
        let rows = sqlx::query_scalar::<_, Value>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().filter_map(into_row).collect())
    }

    /// List rows carrying `user_id` directly (books).
    pub async fn list_for_user(
        pool: &PgPool,
        kind: ResourceKind,
        user_id: &str,
    ) -> Result<Vec<Row>, sqlx::Error> {
        let query = format!(
            "SELECT to_jsonb(r) FROM {table} r WHERE r.user_id = $1 ORDER BY {order}",
            table = kind.table(),
            order = kind.list_order(),
        );
        let rows = sqlx::query_scalar::<_, Value>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().filter_map(into_row).collect())
    }

    /// List every row of a kind regardless of owner (shared wishlist).
    pub async fn list_all(pool: &PgPool, kind: ResourceKind) -> Result<Vec<Row>, sqlx::Error> {
        let query = format!(
            "SELECT to_jsonb(r) FROM {table} r ORDER BY {order}",
            table = kind.table(),
            order = kind.list_order(),
        );
        let rows = sqlx::query_scalar::<_, Value>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().filter_map(into_row).collect())
    }

    /// Write a projected update and refresh `updated_at`.
    ///
    /// An empty projection still touches `updated_at`. Values are coerced
    /// to column types by `jsonb_populate_record`, so malformed values fail
    /// in the database. Returns `false` if no row with `id` exists.
    pub async fn apply(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
        projection: &Projection,
    ) -> Result<bool, sqlx::Error> {
        let table = kind.table();

        let result = if projection.is_empty() {
            let query = format!("UPDATE {table} SET updated_at = NOW() WHERE id = $1");
            sqlx::query(&query).bind(id).execute(pool).await?
        } else {
            let sets = projection
                .columns()
                .map(|c| format!("\"{c}\" = p.\"{c}\""))
                .collect::<Vec<_>>()
                .join(", ");
            let query = format!(
                "UPDATE {table} SET {sets}, updated_at = NOW()
                 FROM jsonb_populate_record(NULL::{table}, $2) AS p
                 WHERE {table}.id = $1"
            );
            sqlx::query(&query)
                .bind(id)
                .bind(projection.to_storage_object())
                .execute(pool)
                .await?
        };

        Ok(result.rows_affected() > 0)
    }

    /// Delete a row by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, kind: ResourceKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
