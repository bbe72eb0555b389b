//! Route definitions for chapters and their illustrations.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::chapters::Chapters;
use crate::handlers::illustrations::{self, Illustrations};
use crate::handlers::scoped;
use crate::state::AppState;

/// Routes mounted at `/chapters`.
///
/// ```text
/// GET    /{id}                          -> get
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
///
/// GET    /{id}/illustrations            -> list illustrations
/// POST   /{id}/illustrations            -> create illustration
/// PUT    /{id}/illustrations/reorder    -> reorder illustrations
/// ```
pub fn router() -> Router<AppState> {
    super::item_routes::<Chapters>()
        .route(
            "/{id}/illustrations",
            get(scoped::list::<Illustrations>).post(illustrations::create),
        )
        .route(
            "/{id}/illustrations/reorder",
            put(scoped::reorder::<Illustrations>),
        )
}
