use axum::routing::get;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Routes mounted at `/images`.
///
/// ```text
/// GET    /{id}    -> get (raw bytes with stored content type)
/// DELETE /{id}    -> delete (always ok)
/// ```
///
/// Uploads are book-scoped and live under `/books/{id}/images`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(images::get).delete(images::delete))
}
