//! Route definitions for the notes resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, mounted at the root.
///
/// ```text
/// GET    /notes/         -> list
/// POST   /note/          -> create
/// PUT    /note/{id}      -> update
/// DELETE /note/{id}      -> delete
/// GET    /note/search/   -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes/", get(notes::list))
        .route("/note/", post(notes::create))
        .route("/note/search/", get(notes::search))
        .route("/note/{id}", put(notes::update).delete(notes::delete))
}
