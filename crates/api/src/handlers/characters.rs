//! Handlers for the `/characters` resource.
//!
//! Characters are nested under books and ordered by `sortOrder`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::character::CreateCharacter;
use quillboard_db::repositories::CharacterRepo;
use quillboard_events::ChangeAction;

use super::scoped::{ensure_parent_owned, ScopedResource};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::CreatedResponse;
use crate::state::AppState;

pub struct Characters;

impl ScopedResource for Characters {
    const KIND: ResourceKind = ResourceKind::Character;
}

/// POST /api/books/{book_id}/characters
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_parent_owned(&state, ResourceKind::Character, book_id, &user).await?;
    let id = CharacterRepo::create(&state.pool, book_id, &input).await?;
    state.notify_change(ResourceKind::Character, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
