//! Handlers for the `/timeline` resource.
//!
//! Timeline events are nested under books. `characterIds` is stored as JSON
//! text and returned as an array.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::timeline_event::CreateTimelineEvent;
use quillboard_db::repositories::TimelineEventRepo;
use quillboard_events::ChangeAction;

use super::scoped::{ensure_chapter_in_book, ensure_parent_owned, ScopedResource};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::CreatedResponse;
use crate::state::AppState;

pub struct TimelineEvents;

impl ScopedResource for TimelineEvents {
    const KIND: ResourceKind = ResourceKind::TimelineEvent;
}

/// POST /api/books/{book_id}/timeline
///
/// A `chapterId` must be a chapter of the same book.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
    Json(input): Json<CreateTimelineEvent>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_parent_owned(&state, ResourceKind::TimelineEvent, book_id, &user).await?;
    ensure_chapter_in_book(&state, input.chapter_id, book_id).await?;
    let id = TimelineEventRepo::create(&state.pool, book_id, &input).await?;
    state.notify_change(ResourceKind::TimelineEvent, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
