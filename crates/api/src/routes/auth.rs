//! Route definitions for registration and token-based auth.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes, mounted at the root.
///
/// ```text
/// POST /token        -> login
/// POST /register/    -> register
/// GET  /protected/   -> protected (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(auth::login))
        .route("/register/", post(auth::register))
        .route("/protected/", get(auth::protected))
}
