//! Handlers for the mower catalog.
//!
//! Each handler decodes the request, calls [`CatalogService`] and encodes the
//! result. Bodies are the bare item shape (`{"id", "name"}`) or an array of it.
//!
//! [`CatalogService`]: mower_core::service::CatalogService

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mower_core::mower::{CreateMower, UpdateMower};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /
///
/// List the whole catalog in storage order.
pub async fn list_mowers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mowers = state.catalog.get_available_mowers().await?;
    tracing::debug!(count = mowers.len(), "Listed mowers");
    Ok(Json(mowers))
}

/// POST /mowers
///
/// Create a mower. Responds 202 with the stored item, id included.
pub async fn create_mower(
    State(state): State<AppState>,
    input: Result<Json<CreateMower>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input.map_err(bad_json)?;
    let created = state.catalog.create_mower(input).await?;
    Ok((StatusCode::ACCEPTED, Json(created)))
}

/// GET /mowers/{id}
pub async fn get_mower(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mower = state.catalog.get_mower(&id).await?;
    Ok(Json(mower))
}

/// PATCH /mowers/{id}
///
/// Partial update: an absent or empty `name` keeps the current one.
pub async fn update_mower(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: Result<Json<UpdateMower>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input.map_err(bad_json)?;
    let mower = state.catalog.update_mower(&id, input).await?;
    Ok(Json(mower))
}

fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
