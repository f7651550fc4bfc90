//! Route definitions for the `/todos/` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes, mounted at the root.
///
/// ```text
/// GET    /todos/                -> list
/// POST   /todos/                -> create
/// PUT    /todos/{id}            -> update
/// DELETE /todos/{id}            -> delete
/// PUT    /todos/{id}/complete   -> toggle_complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos/", get(todos::list).post(todos::create))
        .route("/todos/{id}", put(todos::update).delete(todos::delete))
        .route("/todos/{id}/complete", put(todos::toggle_complete))
}
