//! Generic ownership-scoped handlers.
//!
//! Every resource kind shares one implementation of get, update, delete,
//! list-under-parent and reorder. A kind opts in by implementing
//! [`ScopedResource`] on a marker type, and routes mount the generic
//! handlers for it:
//!
//! ```ignore
//! .route("/{id}", get(scoped::get::<Chapters>).patch(scoped::update::<Chapters>))
//! ```
//!
//! Absent and foreign records are both reported as `404 {Entity} not found`.

use axum::extract::{Path, State};
use axum::Json;
use quillboard_core::ordering;
use quillboard_core::resource::{project, ResourceKind};
use quillboard_core::types::DbId;
use quillboard_db::repositories::{ChapterRepo, OrderingRepo, Row, ScopedRepo};
use quillboard_events::ChangeAction;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{OkResponse, ReorderResponse};
use crate::state::AppState;

/// Binds a marker type to a [`ResourceKind`] for the generic handlers.
pub trait ScopedResource: Send + Sync + 'static {
    const KIND: ResourceKind;
}

/// Request body for bulk reorder: the complete sibling list, in order.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Service helpers
// ---------------------------------------------------------------------------

/// Resolve a record through its ownership chain, or fail with NotFound.
pub async fn require_owned(
    state: &AppState,
    kind: ResourceKind,
    id: DbId,
    user: &AuthUser,
) -> AppResult<Row> {
    ScopedRepo::find_owned(&state.pool, kind, id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found(kind.entity_name()))
}

/// Fail with NotFound unless the caller owns the record.
pub async fn ensure_owned(
    state: &AppState,
    kind: ResourceKind,
    id: DbId,
    user: &AuthUser,
) -> AppResult<()> {
    if ScopedRepo::is_owned(&state.pool, kind, id, &user.user_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found(kind.entity_name()))
    }
}

/// Fail with NotFound unless the caller owns the parent a `kind` record
/// would be created or listed under.
pub async fn ensure_parent_owned(
    state: &AppState,
    kind: ResourceKind,
    parent_id: DbId,
    user: &AuthUser,
) -> AppResult<()> {
    let parent = kind.parent_kind().ok_or_else(|| {
        AppError::InternalError(format!("{} has no parent", kind.entity_name()))
    })?;
    ensure_owned(state, parent, parent_id, user).await
}

/// Fail with NotFound unless `chapter_id` is a chapter of `book_id`.
///
/// `None` (no link) always passes. Chapters of other books, including
/// other users' books, are reported the same as missing ones.
pub async fn ensure_chapter_in_book(
    state: &AppState,
    chapter_id: Option<DbId>,
    book_id: DbId,
) -> AppResult<()> {
    let Some(chapter_id) = chapter_id else {
        return Ok(());
    };
    if ChapterRepo::belongs_to_book(&state.pool, chapter_id, book_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found(ResourceKind::Chapter.entity_name()))
    }
}

/// Chapter id carried by an update payload's chapter reference field.
///
/// `null` clears the link. Values that are not ids are left for the
/// database to reject as malformed.
fn chapter_link(kind: ResourceKind, payload: &Map<String, Value>) -> Option<DbId> {
    let wire = kind.chapter_reference()?;
    payload.get(wire)?.as_str()?.parse().ok()
}

/// Read the parent id out of a storage-form row.
pub fn parent_id_of(kind: ResourceKind, row: &Row) -> AppResult<DbId> {
    kind.parent_column()
        .and_then(|column| row.get(column))
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            AppError::InternalError(format!("{} row without parent id", kind.entity_name()))
        })
}

fn to_wire(kind: ResourceKind, rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().map(|row| kind.shape_for_wire(row)).collect()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /{resource}/{id}
pub async fn get<R: ScopedResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Row>> {
    let row = require_owned(&state, R::KIND, id, &user).await?;
    Ok(Json(R::KIND.shape_for_wire(row)))
}

/// PATCH /{resource}/{id}
///
/// Only whitelisted wire fields are written; everything else in the payload
/// is dropped. A payload with no writable fields still refreshes
/// `updatedAt`. A chapter link must point into the record's own book.
pub async fn update<R: ScopedResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<Json<OkResponse>> {
    match chapter_link(R::KIND, &payload) {
        Some(chapter_id) => {
            let row = require_owned(&state, R::KIND, id, &user).await?;
            let book_id = parent_id_of(R::KIND, &row)?;
            ensure_chapter_in_book(&state, Some(chapter_id), book_id).await?;
        }
        None => ensure_owned(&state, R::KIND, id, &user).await?,
    }

    let projection = project(R::KIND, &payload);
    if !ScopedRepo::apply(&state.pool, R::KIND, id, &projection).await? {
        return Err(AppError::not_found(R::KIND.entity_name()));
    }

    state.notify_change(R::KIND, id, ChangeAction::Updated, &user);
    Ok(Json(OkResponse::ok()))
}

/// DELETE /{resource}/{id}
pub async fn delete<R: ScopedResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<OkResponse>> {
    ensure_owned(&state, R::KIND, id, &user).await?;

    if !ScopedRepo::delete(&state.pool, R::KIND, id).await? {
        return Err(AppError::not_found(R::KIND.entity_name()));
    }

    state.notify_change(R::KIND, id, ChangeAction::Deleted, &user);
    Ok(Json(OkResponse::ok()))
}

/// GET /{parent}/{id}/{resource}
pub async fn list<R: ScopedResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(parent_id): Path<DbId>,
) -> AppResult<Json<Vec<Row>>> {
    ensure_parent_owned(&state, R::KIND, parent_id, &user).await?;
    let rows = ScopedRepo::list_by_parent(&state.pool, R::KIND, parent_id).await?;
    Ok(Json(to_wire(R::KIND, rows)))
}

/// PUT /{parent}/{id}/{resource}/reorder
///
/// Assigns each listed id its 0-based index as `sortOrder`. Duplicate ids
/// are rejected; ids belonging to another parent are ignored.
pub async fn reorder<R: ScopedResource>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(parent_id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<ReorderResponse>> {
    ensure_parent_owned(&state, R::KIND, parent_id, &user).await?;

    let positions = ordering::positions(&input.ids)?;
    let updated = OrderingRepo::reorder(&state.pool, R::KIND, parent_id, &positions).await?;

    if updated > 0 {
        state.notify_change(R::KIND, parent_id, ChangeAction::Reordered, &user);
    }
    Ok(Json(ReorderResponse { ok: true, updated }))
}
