//! Character DTOs.

use quillboard_core::types::DbId;
use serde::Deserialize;

/// DTO for creating a character under a book.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub backstory: Option<String>,
    pub notes: Option<String>,
    pub image_id: Option<DbId>,
    pub sort_order: Option<i32>,
}
