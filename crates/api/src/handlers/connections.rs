//! Handlers for the `/connections` resource.
//!
//! A connection is a labelled edge between two ideas of the same book.
//! Its endpoints are fixed at creation; only `color` and `label` can be
//! updated afterwards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::connection::CreateConnection;
use quillboard_db::repositories::{ConnectionRepo, IdeaRepo};
use quillboard_events::ChangeAction;

use super::scoped::{ensure_parent_owned, ScopedResource};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::CreatedResponse;
use crate::state::AppState;

pub struct Connections;

impl ScopedResource for Connections {
    const KIND: ResourceKind = ResourceKind::Connection;
}

/// POST /api/books/{book_id}/connections
///
/// Both endpoints must be ideas of `book_id`, and they must differ.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
    Json(input): Json<CreateConnection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_parent_owned(&state, ResourceKind::Connection, book_id, &user).await?;

    if input.from_idea_id == input.to_idea_id {
        return Err(AppError::BadRequest(
            "A connection cannot link an idea to itself".to_string(),
        ));
    }

    let endpoints = [input.from_idea_id, input.to_idea_id];
    if IdeaRepo::count_in_book(&state.pool, book_id, &endpoints).await? != 2 {
        return Err(AppError::BadRequest(
            "Both ideas must belong to the book".to_string(),
        ));
    }

    let id = ConnectionRepo::create(&state.pool, book_id, &input).await?;
    state.notify_change(ResourceKind::Connection, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
