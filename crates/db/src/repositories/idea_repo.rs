//! Repository for the `ideas` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use super::ordering_repo::append_position;
use crate::models::idea::CreateIdea;

pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert an idea on `book_id`'s storyboard, stacked on top unless
    /// `z_index` is given. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        input: &CreateIdea,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas
                (id, book_id, title, description, image_id, color, position_x, position_y,
                 width, height, z_index, linked_chapter_id, type)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, 'yellow'),
                     COALESCE($7, 0), COALESCE($8, 0), COALESCE($9, 200), COALESCE($10, 150),
                     COALESCE($11, {append}), $12, COALESCE($13, 'note'))
             RETURNING id",
            append = append_position("ideas", "book_id", "z_index", "$2"),
        );
        sqlx::query_scalar(&query)
            .bind(new_id())
            .bind(book_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.image_id)
            .bind(&input.color)
            .bind(input.position_x)
            .bind(input.position_y)
            .bind(input.width)
            .bind(input.height)
            .bind(input.z_index)
            .bind(input.linked_chapter_id)
            .bind(&input.idea_type)
            .fetch_one(pool)
            .await
    }

    /// Count how many of `idea_ids` belong to `book_id`.
    pub async fn count_in_book(
        pool: &PgPool,
        book_id: DbId,
        idea_ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM ideas WHERE book_id = $1 AND id = ANY($2::uuid[])",
        )
        .bind(book_id)
        .bind(idea_ids)
        .fetch_one(pool)
        .await
    }
}
