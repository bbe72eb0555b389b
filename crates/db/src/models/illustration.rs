//! Illustration DTOs.

use quillboard_core::types::DbId;
use serde::Deserialize;

/// DTO for attaching an illustration to a chapter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIllustration {
    pub caption: Option<String>,
    pub sort_order: Option<i32>,
    pub image_id: Option<DbId>,
}
