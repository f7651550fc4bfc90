//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` body used by registration and the protected greeting.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub success: bool,
    pub message: &'static str,
    pub note: &'static str,
}
