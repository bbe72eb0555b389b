//! Handlers for the shared `/wishlist`.
//!
//! Every signed-in user sees every item and may flip its status. Editing
//! and deleting stay with the item's creator (generic scoped handlers).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::error::CoreError;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_core::wishlist::{creator_name, WishlistStatus};
use quillboard_db::models::wishlist::CreateWishlistItem;
use quillboard_db::repositories::{Row, ScopedRepo, WishlistRepo};
use quillboard_events::ChangeAction;

use super::scoped::ScopedResource;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, ToggleResponse};
use crate::state::AppState;

pub struct WishlistItems;

impl ScopedResource for WishlistItems {
    const KIND: ResourceKind = ResourceKind::WishlistItem;
}

/// GET /api/wishlist
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Row>>> {
    let rows = ScopedRepo::list_all(&state.pool, ResourceKind::WishlistItem).await?;
    Ok(Json(
        rows.into_iter()
            .map(|row| ResourceKind::WishlistItem.shape_for_wire(row))
            .collect(),
    ))
}

/// GET /api/wishlist/{id}
///
/// Readable by every user, like the list.
pub async fn get(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Row>> {
    let row = WishlistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ResourceKind::WishlistItem.entity_name()))?;
    Ok(Json(ResourceKind::WishlistItem.shape_for_wire(row)))
}

/// POST /api/wishlist
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateWishlistItem>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()).into());
    }

    let created_by = creator_name(input.created_by_name.as_deref(), user.email.as_deref());
    let id = WishlistRepo::create(&state.pool, &user.user_id, &created_by, &input).await?;

    state.notify_change(ResourceKind::WishlistItem, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// POST /api/wishlist/{id}/toggle
///
/// Flips `open` <-> `done`. Any user may toggle any item.
pub async fn toggle(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ToggleResponse>> {
    let stored = WishlistRepo::toggle_status(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ResourceKind::WishlistItem.entity_name()))?;
    let status = WishlistStatus::from_name(&stored)?;

    state.notify_change(ResourceKind::WishlistItem, id, ChangeAction::Updated, &user);
    Ok(Json(ToggleResponse { ok: true, status }))
}
