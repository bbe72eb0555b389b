//! Route definitions for books and their book-scoped children.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::books::{self, Books};
use crate::handlers::chapters::{self, Chapters};
use crate::handlers::characters::{self, Characters};
use crate::handlers::connections::{self, Connections};
use crate::handlers::ideas::{self, Ideas};
use crate::handlers::images;
use crate::handlers::scoped;
use crate::handlers::timeline::{self, TimelineEvents};
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete (cascades, removes assets)
///
/// GET    /{id}/chapters                 -> list chapters
/// POST   /{id}/chapters                 -> create chapter
/// PUT    /{id}/chapters/reorder         -> reorder chapters
/// GET    /{id}/characters               -> list characters
/// POST   /{id}/characters               -> create character
/// PUT    /{id}/characters/reorder       -> reorder characters
/// GET    /{id}/ideas                    -> list ideas
/// POST   /{id}/ideas                    -> create idea
/// GET    /{id}/connections              -> list connections
/// POST   /{id}/connections              -> create connection
/// GET    /{id}/timeline                 -> list timeline events
/// POST   /{id}/timeline                 -> create timeline event
/// PUT    /{id}/timeline/reorder         -> reorder timeline events
/// GET    /{id}/images                   -> list image metadata
/// POST   /{id}/images                   -> upload image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list).post(books::create))
        .route(
            "/{id}",
            get(scoped::get::<Books>)
                .patch(scoped::update::<Books>)
                .delete(books::delete),
        )
        // Chapters
        .route(
            "/{id}/chapters",
            get(scoped::list::<Chapters>).post(chapters::create),
        )
        .route("/{id}/chapters/reorder", put(scoped::reorder::<Chapters>))
        // Characters
        .route(
            "/{id}/characters",
            get(scoped::list::<Characters>).post(characters::create),
        )
        .route(
            "/{id}/characters/reorder",
            put(scoped::reorder::<Characters>),
        )
        // Idea board
        .route("/{id}/ideas", get(scoped::list::<Ideas>).post(ideas::create))
        .route(
            "/{id}/connections",
            get(scoped::list::<Connections>).post(connections::create),
        )
        // Timeline
        .route(
            "/{id}/timeline",
            get(scoped::list::<TimelineEvents>).post(timeline::create),
        )
        .route(
            "/{id}/timeline/reorder",
            put(scoped::reorder::<TimelineEvents>),
        )
        // Images
        .route(
            "/{id}/images",
            get(images::list_by_book).post(images::upload),
        )
}
