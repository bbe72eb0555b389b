//! Repository for the `timeline_events` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use super::ordering_repo::append_position;
use crate::models::timeline_event::CreateTimelineEvent;

pub struct TimelineEventRepo;

impl TimelineEventRepo {
    /// Insert a timeline event under `book_id`, appended after its siblings
    /// unless `sort_order` is given. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        input: &CreateTimelineEvent,
    ) -> Result<DbId, sqlx::Error> {
        let character_ids = input
            .character_ids
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "INSERT INTO timeline_events
                (id, book_id, title, description, chapter_id, character_ids,
                 event_type, sort_order, color)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, '[]'),
                     COALESCE($7, 'event'), COALESCE($8, {append}), $9)
             RETURNING id",
            append = append_position("timeline_events", "book_id", "sort_order", "$2"),
        );
        sqlx::query_scalar(&query)
            .bind(new_id())
            .bind(book_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.chapter_id)
            .bind(character_ids)
            .bind(&input.event_type)
            .bind(input.sort_order)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }
}
