pub mod health;
pub mod mowers;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// ```text
/// /                    list (GET)
/// /mowers              create (POST)
/// /mowers/{id}         get (GET), partial update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(mowers::router())
}
