use std::sync::Arc;

use mower_core::service::CatalogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog business logic over the configured repository.
    pub catalog: Arc<CatalogService>,
}
