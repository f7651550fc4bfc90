//! Liveness route for load balancers and container health checks.
//!
//! ```text
//! GET /health   -> health_check
//! ```
//!
//! Always answers 200; a failed `SELECT 1` downgrades `status` to
//! `"degraded"` instead of failing the request.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `qdo-api` package version.
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_db_status(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match qdo_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse::from_db_status(db_healthy))
}

/// Health routes, mounted at the root next to the API routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_reports_degraded() {
        let health = HealthResponse::from_db_status(false);
        assert_eq!(health.status, "degraded");
        assert!(!health.db_healthy);
    }

    #[test]
    fn reachable_database_reports_ok() {
        assert_eq!(HealthResponse::from_db_status(true).status, "ok");
    }
}
