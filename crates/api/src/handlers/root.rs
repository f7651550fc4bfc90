//! Handler for the API root.

use axum::Json;

use crate::response::WelcomeResponse;

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        success: true,
        message: "Hello from Qdo",
        note: "Welcome to the Qdo API!",
    })
}
