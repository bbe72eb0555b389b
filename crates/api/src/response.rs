//! Shared response bodies for API handlers.
//!
//! Reads return wire-form rows directly. Mutations answer with one of the
//! small acknowledgement shapes below instead of ad-hoc `json!` values.

use quillboard_core::types::DbId;
use quillboard_core::wishlist::WishlistStatus;
use serde::Serialize;

/// `{ "ok": true }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{ "id": ... }` returned with `201 Created`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// Result of a bulk reorder: how many siblings were repositioned.
#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    pub ok: bool,
    pub updated: u64,
}

/// New stacking value after bring-to-front.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontResponse {
    pub ok: bool,
    pub z_index: i32,
}

/// New status after a wishlist toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub ok: bool,
    pub status: WishlistStatus,
}
