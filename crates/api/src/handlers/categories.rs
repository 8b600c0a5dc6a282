//! Handlers for the `/categories` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracker_core::inventory::model::{Category, CategoryDraft};
use tracker_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryDraft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    let Json(draft) = payload?;
    let category = state.inventory.categories.create(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = state.inventory.categories.list().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = state.inventory.categories.get(id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<CategoryDraft>, JsonRejection>,
) -> AppResult<Json<DataResponse<Category>>> {
    let Json(draft) = payload?;
    let category = state.inventory.categories.update(id, draft).await?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Refused with 409 while assets still reference the category.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.inventory.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
