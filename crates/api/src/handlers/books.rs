//! Handlers for the `/books` resource.
//!
//! Books are the ownership root: every other record (except wishlist
//! items) resolves its owner through the book it belongs to.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_db::models::book::CreateBook;
use quillboard_db::repositories::{BookRepo, Row, ScopedRepo};
use quillboard_events::ChangeAction;

use super::scoped::{ensure_owned, ScopedResource};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, OkResponse};
use crate::state::AppState;

pub struct Books;

impl ScopedResource for Books {
    const KIND: ResourceKind = ResourceKind::Book;
}

/// GET /api/books
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Row>>> {
    let rows = ScopedRepo::list_for_user(&state.pool, ResourceKind::Book, &user.user_id).await?;
    Ok(Json(
        rows.into_iter()
            .map(|row| ResourceKind::Book.shape_for_wire(row))
            .collect(),
    ))
}

/// POST /api/books
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = BookRepo::create(&state.pool, &user.user_id, &input).await?;
    state.notify_change(ResourceKind::Book, id, ChangeAction::Created, &user);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// DELETE /api/books/{id}
///
/// Descendant rows go with the book via `ON DELETE CASCADE`; the book's
/// asset directory is removed afterwards.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<OkResponse>> {
    ensure_owned(&state, ResourceKind::Book, id, &user).await?;

    if !ScopedRepo::delete(&state.pool, ResourceKind::Book, id).await? {
        return Err(AppError::not_found(ResourceKind::Book.entity_name()));
    }
    match state.assets.remove_book_dir(id).await {
        Ok(removed_assets) => {
            tracing::debug!(book_id = %id, removed_assets, "Book assets cleaned up");
        }
        Err(e) => {
            tracing::error!(error = %e, book_id = %id, "Failed to remove book assets");
        }
    }

    state.notify_change(ResourceKind::Book, id, ChangeAction::Deleted, &user);
    Ok(Json(OkResponse::ok()))
}
