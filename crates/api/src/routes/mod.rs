pub mod auth;
pub mod health;
pub mod notes;
pub mod todos;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                          welcome
///
/// /notes/                    list notes
/// /note/                     create note (POST)
/// /note/{id}                 update, delete
/// /note/search/              substring search (GET)
///
/// /todos/                    list, create
/// /todos/{id}                update, delete
/// /todos/{id}/complete       toggle completion (PUT)
///
/// /token                     login (POST, form)
/// /register/                 register (POST)
/// /protected/                greeting (requires bearer token)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::welcome))
        .merge(notes::router())
        .merge(todos::router())
        .merge(auth::router())
}
