//! Repository for the `chapters` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use super::ordering_repo::append_position;
use crate::models::chapter::CreateChapter;

pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a chapter under `book_id`, appended after its siblings unless
    /// `sort_order` is given. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        input: &CreateChapter,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters (id, book_id, title, content, sort_order, word_count, status, notes)
             VALUES ($1, $2, COALESCE($3, 'Untitled chapter'), COALESCE($4, ''),
                     COALESCE($5, {append}), COALESCE($6, 0), COALESCE($7, 'draft'), $8)
             RETURNING id",
            append = append_position("chapters", "book_id", "sort_order", "$2"),
        );
        sqlx::query_scalar(&query)
            .bind(new_id())
            .bind(book_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.sort_order)
            .bind(input.word_count)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Whether `chapter_id` is a chapter of `book_id`.
    ///
    /// A missing chapter and a chapter of another book are both `false`.
    pub async fn belongs_to_book(
        pool: &PgPool,
        chapter_id: DbId,
        book_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM chapters WHERE id = $1 AND book_id = $2)",
        )
        .bind(chapter_id)
        .bind(book_id)
        .fetch_one(pool)
        .await
    }
}
