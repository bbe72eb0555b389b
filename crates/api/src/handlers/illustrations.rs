//! Handlers for the `/illustrations` resource.
//!
//! Illustrations hang off chapters, so their owner is resolved through
//! chapter and then book.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::illustration::CreateIllustration;
use quillboard_db::repositories::IllustrationRepo;
use quillboard_events::ChangeAction;

use super::scoped::{ensure_parent_owned, ScopedResource};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::CreatedResponse;
use crate::state::AppState;

pub struct Illustrations;

impl ScopedResource for Illustrations {
    const KIND: ResourceKind = ResourceKind::Illustration;
}

/// POST /api/chapters/{chapter_id}/illustrations
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(chapter_id): Path<DbId>,
    Json(input): Json<CreateIllustration>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_parent_owned(&state, ResourceKind::Illustration, chapter_id, &user).await?;
    let id = IllustrationRepo::create(&state.pool, chapter_id, &input).await?;
    state.notify_change(ResourceKind::Illustration, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
