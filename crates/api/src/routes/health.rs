use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of mowers in the catalog, if the repository answered.
    pub mower_count: Option<usize>,
}

/// GET /health -- returns service and catalog health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mower_count = state.catalog.mower_count().await.ok();

    let status = if mower_count.is_some() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        mower_count,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
