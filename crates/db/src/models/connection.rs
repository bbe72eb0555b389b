//! Connection DTOs.

use quillboard_core::types::DbId;
use serde::Deserialize;

/// DTO for creating an edge between two ideas of the same book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnection {
    pub from_idea_id: DbId,
    pub to_idea_id: DbId,
    pub color: Option<String>,
    pub label: Option<String>,
}
