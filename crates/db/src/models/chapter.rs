//! Chapter DTOs.

use serde::Deserialize;

/// DTO for creating a chapter under a book.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapter {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Appended after the last sibling if omitted.
    pub sort_order: Option<i32>,
    pub word_count: Option<i32>,
    /// Defaults to `"draft"`.
    pub status: Option<String>,
    pub notes: Option<String>,
}
