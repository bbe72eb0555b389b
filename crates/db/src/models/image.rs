//! Image metadata model.

use quillboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table. The bytes live in the asset store.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: DbId,
    pub book_id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub size: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Metadata recorded after the blob has been written.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub id: DbId,
    pub book_id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub size: i64,
}
