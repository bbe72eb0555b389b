//! Idea (storyboard note) DTOs.

use quillboard_core::types::DbId;
use serde::Deserialize;

/// DTO for placing a new idea on a book's storyboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdea {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_id: Option<DbId>,
    pub color: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Placed above every sibling if omitted.
    pub z_index: Option<i32>,
    pub linked_chapter_id: Option<DbId>,
    #[serde(rename = "type")]
    pub idea_type: Option<String>,
}
