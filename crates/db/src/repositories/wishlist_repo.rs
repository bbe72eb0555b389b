//! Repository for the shared `wishlist_items` table.

use quillboard_core::types::{new_id, DbId};
use quillboard_core::wishlist::STATUS_OPEN;
use serde_json::Value;
use sqlx::PgPool;

use super::scoped_repo::Row;
use crate::models::wishlist::CreateWishlistItem;

pub struct WishlistRepo;

impl WishlistRepo {
    /// Insert an open item created by `user_id`. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        created_by_name: &str,
        input: &CreateWishlistItem,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO wishlist_items
                (id, user_id, title, description, type, status, created_by_name)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'feature'), $6, $7)
             RETURNING id",
        )
        .bind(new_id())
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.item_type)
        .bind(STATUS_OPEN)
        .bind(created_by_name)
        .fetch_one(pool)
        .await
    }

    /// Any item by id, regardless of creator. The wishlist is shared.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Row>, sqlx::Error> {
        let row = sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(r) FROM wishlist_items r WHERE r.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        }))
    }

    /// Flip `open` <-> `done` for any item, regardless of creator.
    ///
    /// Single statement, so concurrent toggles never lose a flip. Returns
    /// the new status, or `None` if the item does not exist.
    pub async fn toggle_status(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE wishlist_items
             SET status = CASE WHEN status = 'open' THEN 'done' ELSE 'open' END,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING status",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
