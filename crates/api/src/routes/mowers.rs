use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mowers;
use crate::state::AppState;

/// Mower catalog routes, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mowers::list_mowers))
        .route("/mowers", post(mowers::create_mower))
        .route(
            "/mowers/{id}",
            get(mowers::get_mower).patch(mowers::update_mower),
        )
}
