pub mod books;
pub mod chapters;
pub mod health;
pub mod ideas;
pub mod images;
pub mod wishlist;

use axum::routing::get;
use axum::Router;

use crate::handlers::characters::Characters;
use crate::handlers::connections::Connections;
use crate::handlers::illustrations::Illustrations;
use crate::handlers::me;
use crate::handlers::scoped::{self, ScopedResource};
use crate::handlers::timeline::TimelineEvents;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /me                                          verified identity
///
/// /books                                       list, create
/// /books/{id}                                  get, update, delete
/// /books/{id}/chapters                         list, create
/// /books/{id}/chapters/reorder                 reorder (PUT)
/// /books/{id}/characters                       list, create
/// /books/{id}/characters/reorder               reorder (PUT)
/// /books/{id}/ideas                            list, create
/// /books/{id}/connections                      list, create
/// /books/{id}/timeline                         list, create
/// /books/{id}/timeline/reorder                 reorder (PUT)
/// /books/{id}/images                           list, upload (multipart)
///
/// /chapters/{id}                               get, update, delete
/// /chapters/{id}/illustrations                 list, create
/// /chapters/{id}/illustrations/reorder         reorder (PUT)
///
/// /ideas/{id}                                  get, update, delete
/// /ideas/{id}/front                            bring to front (POST)
///
/// /characters/{id}                             get, update, delete
/// /connections/{id}                            get, update, delete
/// /illustrations/{id}                          get, update, delete
/// /timeline/{id}                               get, update, delete
///
/// /images/{id}                                 serve bytes, delete
///
/// /wishlist                                    list, create
/// /wishlist/{id}                               get (any user), update, delete (creator only)
/// /wishlist/{id}/toggle                        toggle status (POST, any user)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me::me))
        .nest("/books", books::router())
        .nest("/chapters", chapters::router())
        .nest("/ideas", ideas::router())
        .nest("/characters", item_routes::<Characters>())
        .nest("/connections", item_routes::<Connections>())
        .nest("/illustrations", item_routes::<Illustrations>())
        .nest("/timeline", item_routes::<TimelineEvents>())
        .nest("/images", images::router())
        .nest("/wishlist", wishlist::router())
}

/// `/{id}` with the generic get, update and delete handlers for `R`.
pub fn item_routes<R: ScopedResource>() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(scoped::get::<R>)
            .patch(scoped::update::<R>)
            .delete(scoped::delete::<R>),
    )
}
