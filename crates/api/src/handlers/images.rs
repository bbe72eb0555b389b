//! Handlers for image upload, retrieval and deletion.
//!
//! Metadata lives in the `images` table; the bytes live in the asset store
//! at `{ASSET_DIR}/{book_id}/{image_id}.{ext}`, where the extension is
//! derived from the declared MIME type.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::{new_id, DbId};
use quillboard_db::models::image::{Image, NewImage};
use quillboard_db::repositories::{ImageRepo, ScopedRepo};
use quillboard_events::ChangeAction;

use super::scoped::ensure_parent_owned;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::OkResponse;
use crate::state::AppState;

/// Multipart field carrying the image bytes.
const FILE_FIELD: &str = "file";
const DEFAULT_MIME: &str = "application/octet-stream";
const DEFAULT_FILENAME: &str = "upload";
const NOSNIFF: &str = "nosniff";
const SANDBOX_POLICY: &str = "default-src 'none'; sandbox";

/// GET /api/books/{book_id}/images
pub async fn list_by_book(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
) -> AppResult<Json<Vec<Image>>> {
    ensure_parent_owned(&state, ResourceKind::Image, book_id, &user).await?;
    let images = ImageRepo::list_by_book(&state.pool, book_id).await?;
    Ok(Json(images))
}

/// POST /api/books/{book_id}/images
///
/// Accepts a multipart body with a single `file` field. The blob is written
/// first and its metadata recorded under the same generated id.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    Path(book_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Image>)> {
    ensure_parent_owned(&state, ResourceKind::Image, book_id, &user).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or(DEFAULT_FILENAME).to_string();
        let mime_type = field.content_type().unwrap_or(DEFAULT_MIME).to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let id = new_id();
        state.assets.write(book_id, id, &mime_type, &data).await?;

        let input = NewImage {
            id,
            book_id,
            filename,
            mime_type,
            size: data.len() as i64,
        };
        let image = match ImageRepo::create(&state.pool, &input).await {
            Ok(image) => image,
            Err(e) => {
                // Do not leave an orphaned blob behind.
                if let Err(cleanup) = state.assets.delete(book_id, id, &input.mime_type).await {
                    tracing::warn!(
                        error = %cleanup,
                        image_id = %id,
                        "Failed to remove orphaned blob"
                    );
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            image_id = %id,
            %book_id,
            size = image.size,
            mime_type = %image.mime_type,
            "Image uploaded"
        );
        state.notify_change(ResourceKind::Image, id, ChangeAction::Created, &user);
        return Ok((StatusCode::CREATED, Json(image)));
    }

    Err(AppError::BadRequest(format!(
        "Multipart body has no '{FILE_FIELD}' field"
    )))
}

/// GET /api/images/{id}
///
/// Serves the stored bytes with the recorded, client-declared content type,
/// marked `nosniff` and sandboxed. Metadata without a file on disk is
/// reported separately from missing metadata.
pub async fn get(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let image = ImageRepo::find_owned(&state.pool, id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found(ResourceKind::Image.entity_name()))?;

    let bytes = state
        .assets
        .read(image.book_id, image.id, &image.mime_type)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, image.mime_type),
            (header::CONTENT_LENGTH, bytes.len().to_string()),
            (header::X_CONTENT_TYPE_OPTIONS, NOSNIFF.to_string()),
            (header::CONTENT_SECURITY_POLICY, SANDBOX_POLICY.to_string()),
        ],
        bytes,
    )
        .into_response())
}

/// DELETE /api/images/{id}
///
/// Removes the file, then the metadata row. Missing pieces and file
/// removal failures are logged, and the response is always `{ ok: true }`.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<OkResponse>> {
    let Some(image) = ImageRepo::find_owned(&state.pool, id, &user.user_id).await? else {
        return Ok(Json(OkResponse::ok()));
    };

    match state
        .assets
        .delete(image.book_id, image.id, &image.mime_type)
        .await
    {
        Ok(true) => {}
        Ok(false) => tracing::warn!(image_id = %id, "Image file already gone"),
        Err(e) => tracing::error!(error = %e, image_id = %id, "Failed to remove image file"),
    }

    if ScopedRepo::delete(&state.pool, ResourceKind::Image, id).await? {
        state.notify_change(ResourceKind::Image, id, ChangeAction::Deleted, &user);
    }
    Ok(Json(OkResponse::ok()))
}
