//! Wishlist DTOs.

use serde::Deserialize;

/// DTO for proposing a feature on the shared wishlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistItem {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"feature"`.
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    /// Falls back to the caller's email, then `"Anonymous"`.
    pub created_by_name: Option<String>,
}
