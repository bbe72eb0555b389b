//! Repository for the `illustrations` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use super::ordering_repo::append_position;
use crate::models::illustration::CreateIllustration;

pub struct IllustrationRepo;

impl IllustrationRepo {
    /// Insert an illustration under `chapter_id`, appended after its
    /// siblings unless `sort_order` is given. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        chapter_id: DbId,
        input: &CreateIllustration,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO illustrations (id, chapter_id, caption, sort_order, image_id)
             VALUES ($1, $2, $3, COALESCE($4, {append}), $5)
             RETURNING id",
            append = append_position("illustrations", "chapter_id", "sort_order", "$2"),
        );
        sqlx::query_scalar(&query)
            .bind(new_id())
            .bind(chapter_id)
            .bind(&input.caption)
            .bind(input.sort_order)
            .bind(input.image_id)
            .fetch_one(pool)
            .await
    }
}
