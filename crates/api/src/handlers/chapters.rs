//! Handlers for the `/chapters` resource.
//!
//! Chapters are nested under books and ordered by `sortOrder`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::chapter::CreateChapter;
use quillboard_db::repositories::ChapterRepo;
use quillboard_events::ChangeAction;

use super::scoped::{ensure_parent_owned, ScopedResource};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::CreatedResponse;
use crate::state::AppState;

pub struct Chapters;

impl ScopedResource for Chapters {
    const KIND: ResourceKind = ResourceKind::Chapter;
}

/// POST /api/books/{book_id}/chapters
///
/// Appended after the existing chapters unless `sortOrder` is given.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
    Json(input): Json<CreateChapter>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_parent_owned(&state, ResourceKind::Chapter, book_id, &user).await?;
    let id = ChapterRepo::create(&state.pool, book_id, &input).await?;
    state.notify_change(ResourceKind::Chapter, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
