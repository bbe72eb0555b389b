//! Handlers for the `/ideas` resource.
//!
//! Ideas are cards on a book's idea board. Their stacking order is
//! `zIndex`; "bring to front" lifts one card above all of its siblings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::idea::CreateIdea;
use quillboard_db::repositories::{IdeaRepo, OrderingRepo};
use quillboard_events::ChangeAction;

use super::scoped::{
    ensure_chapter_in_book, ensure_parent_owned, parent_id_of, require_owned, ScopedResource,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, FrontResponse};
use crate::state::AppState;

pub struct Ideas;

impl ScopedResource for Ideas {
    const KIND: ResourceKind = ResourceKind::Idea;
}

/// POST /api/books/{book_id}/ideas
///
/// New ideas land on top of the board unless `zIndex` is given. A
/// `linkedChapterId` must be a chapter of the same book.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
    Json(input): Json<CreateIdea>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_parent_owned(&state, ResourceKind::Idea, book_id, &user).await?;
    ensure_chapter_in_book(&state, input.linked_chapter_id, book_id).await?;
    let id = IdeaRepo::create(&state.pool, book_id, &input).await?;
    state.notify_change(ResourceKind::Idea, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// POST /api/ideas/{id}/front
pub async fn bring_to_front(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<FrontResponse>> {
    let row = require_owned(&state, ResourceKind::Idea, id, &user).await?;
    let book_id = parent_id_of(ResourceKind::Idea, &row)?;

    let z_index = OrderingRepo::bring_to_front(&state.pool, id, book_id)
        .await?
        .ok_or_else(|| AppError::not_found(ResourceKind::Idea.entity_name()))?;

    state.notify_change(ResourceKind::Idea, id, ChangeAction::Updated, &user);
    Ok(Json(FrontResponse { ok: true, z_index }))
}
