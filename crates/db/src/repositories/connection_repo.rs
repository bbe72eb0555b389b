//! Repository for the `connections` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::connection::CreateConnection;

pub struct ConnectionRepo;

impl ConnectionRepo {
    /// Insert an edge between two ideas of `book_id`. Returns the new id.
    ///
    /// The caller checks that both endpoints belong to the book.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        input: &CreateConnection,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO connections (id, book_id, from_idea_id, to_idea_id, color, label)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(new_id())
        .bind(book_id)
        .bind(input.from_idea_id)
        .bind(input.to_idea_id)
        .bind(&input.color)
        .bind(&input.label)
        .fetch_one(pool)
        .await
    }
}
