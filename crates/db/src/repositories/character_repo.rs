//! Repository for the `characters` table.

use quillboard_core::types::{new_id, DbId};
use sqlx::PgPool;

use super::ordering_repo::append_position;
use crate::models::character::CreateCharacter;

pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character under `book_id`, appended after its siblings
    /// unless `sort_order` is given. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        input: &CreateCharacter,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (id, book_id, name, role, description, appearance, personality,
                 backstory, notes, image_id, sort_order)
             VALUES ($1, $2, COALESCE($3, 'Unnamed'), $4, $5, $6, $7, $8, $9, $10,
                     COALESCE($11, {append}))
             RETURNING id",
            append = append_position("characters", "book_id", "sort_order", "$2"),
        );
        sqlx::query_scalar(&query)
            .bind(new_id())
            .bind(book_id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.description)
            .bind(&input.appearance)
            .bind(&input.personality)
            .bind(&input.backstory)
            .bind(&input.notes)
            .bind(input.image_id)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }
}
