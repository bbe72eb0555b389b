//! Book DTOs.

use quillboard_core::types::DbId;
use serde::Deserialize;

/// DTO for creating a book. The owner comes from the verified identity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    /// Defaults to `"Untitled"` if omitted.
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub cover_image_id: Option<DbId>,
}
