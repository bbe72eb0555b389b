//! Repository for the `books` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::book::CreateBook;

/// Book creation. Reads, updates and deletes go through `ScopedRepo`;
/// descendants are removed by `ON DELETE CASCADE`.
pub struct BookRepo;

impl BookRepo {
    /// Insert a book owned by `user_id`, returning its id.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateBook,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO books (id, user_id, title, description, genre, cover_image_id)
             VALUES ($1, $2, COALESCE($3, 'Untitled'), $4, $5, $6)
             RETURNING id",
        )
        .bind(new_id())
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.genre)
        .bind(input.cover_image_id)
        .fetch_one(pool)
        .await
    }
}
