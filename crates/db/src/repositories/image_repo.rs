//! Repository for the `images` table (metadata only).

use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use sqlx::PgPool;

use super::scoped_repo::owned_source;
use crate::models::image::{Image, NewImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "r.id, r.book_id, r.filename, r.mime_type, r.size, r.created_at, r.updated_at";

pub struct ImageRepo;

impl ImageRepo {
    /// Record metadata for a blob already written under `input.id`.
    pub async fn create(pool: &PgPool, input: &NewImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images AS r (id, book_id, filename, mime_type, size)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(input.id)
            .bind(input.book_id)
            .bind(&input.filename)
            .bind(&input.mime_type)
            .bind(input.size)
            .fetch_one(pool)
            .await
    }

    /// Typed metadata lookup through the book ownership chain.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {}",
            owned_source(ResourceKind::Image)
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// All image metadata of a book, oldest first.
    pub async fn list_by_book(pool: &PgPool, book_id: DbId) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images r WHERE r.book_id = $1 ORDER BY r.created_at ASC"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(book_id)
            .fetch_all(pool)
            .await
    }
}
