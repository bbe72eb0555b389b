//! Route definitions for the shared wishlist.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scoped;
use crate::handlers::wishlist::{self, WishlistItems};
use crate::state::AppState;

/// Routes mounted at `/wishlist`.
///
/// ```text
/// GET    /               -> list (every user's items)
/// POST   /               -> create
/// GET    /{id}           -> get (any user)
/// PATCH  /{id}           -> update (creator only)
/// DELETE /{id}           -> delete (creator only)
/// POST   /{id}/toggle    -> toggle status (any user)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::list).post(wishlist::create))
        .route(
            "/{id}",
            get(wishlist::get)
                .patch(scoped::update::<WishlistItems>)
                .delete(scoped::delete::<WishlistItems>),
        )
        .route("/{id}/toggle", post(wishlist::toggle))
}
