//! Sibling ordering writes: bulk reorder and bring-to-front.

use quillboard_core::ordering::{next_position, FIRST_POSITION};
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use sqlx::PgPool;

/// SQL expression yielding the position after the last sibling.
///
/// Used as a `COALESCE` fallback in create statements; `$parent_param`
/// names the bind parameter holding the parent id.
pub(crate) fn append_position(
    table: &str,
    parent_column: &str,
    position_column: &str,
    parent_param: &str,
) -> String {
    format!(
        "(SELECT COALESCE(MAX({position_column}) + 1, {FIRST_POSITION})
          FROM {table} WHERE {parent_column} = {parent_param})"
    )
}

/// Writes that maintain `sort_order` and `z_index`.
pub struct OrderingRepo;

impl OrderingRepo {
    /// Rewrite `sort_order` for a parent's children in one statement.
    ///
    /// `positions` pairs each id with its new position. Ids that are not
    /// children of `parent_id` are skipped. Returns the number of rows
    /// repositioned.
    pub async fn reorder(
        pool: &PgPool,
        kind: ResourceKind,
        parent_id: DbId,
        positions: &[(DbId, i32)],
    ) -> Result<u64, sqlx::Error> {
        let Some(parent) = kind.parent_column() else {
            return Ok(0);
        };
        if !kind.is_reorderable() || positions.is_empty() {
            return Ok(0);
        }

        let (ids, orders): (Vec<DbId>, Vec<i32>) = positions.iter().copied().unzip();
        let table = kind.table();
        let query = format!(
            "UPDATE {table} AS r SET sort_order = t.pos, updated_at = NOW()
             FROM UNNEST($2::uuid[], $3::int4[]) AS t(id, pos)
             WHERE r.id = t.id AND r.{parent} = $1"
        );

        let result = sqlx::query(&query)
            .bind(parent_id)
            .bind(&ids)
            .bind(&orders)
            .execute(pool)
            .await?;

        tracing::debug!(
            table,
            %parent_id,
            requested = positions.len(),
            updated = result.rows_affected(),
            "Reordered siblings"
        );

        Ok(result.rows_affected())
    }

    /// Put an idea above every other idea of its book.
    ///
    /// Locks the book row first so concurrent calls for the same book are
    /// serialised and each observes the previous call's `z_index`.
    /// Returns the new `z_index`, or `None` if the idea is not in the book.
    pub async fn bring_to_front(
        pool: &PgPool,
        idea_id: DbId,
        book_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM books WHERE id = $1 FOR UPDATE")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        let current_max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(z_index) FROM ideas WHERE book_id = $1")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;
        let next = next_position(current_max);

        let result = sqlx::query(
            "UPDATE ideas SET z_index = $3, updated_at = NOW()
             WHERE id = $1 AND book_id = $2",
        )
        .bind(idea_id)
        .bind(book_id)
        .bind(next)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(next))
    }
}
