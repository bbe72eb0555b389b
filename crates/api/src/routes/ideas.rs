use axum::routing::post;
use axum::Router;

use crate::handlers::ideas::{self, Ideas};
use crate::state::AppState;

/// Routes mounted at `/ideas`.
///
/// ```text
/// GET    /{id}          -> get
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/front    -> bring_to_front
/// ```
pub fn router() -> Router<AppState> {
    super::item_routes::<Ideas>().route("/{id}/front", post(ideas::bring_to_front))
}
