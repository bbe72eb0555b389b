//! Timeline event DTOs.

use quillboard_core::types::DbId;
use serde::Deserialize;

/// DTO for creating a timeline event under a book.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub chapter_id: Option<DbId>,
    /// Stored as JSON text; order is preserved.
    pub character_ids: Option<Vec<DbId>>,
    pub event_type: Option<String>,
    pub sort_order: Option<i32>,
    pub color: Option<String>,
}
