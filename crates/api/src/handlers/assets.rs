//! Handlers for the `/assets` resource and its lifecycle transitions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracker_core::inventory::model::{Asset, AssetDraft};
use tracker_core::types::DbId;

use crate::error::AppResult;
use crate::query::NameSearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/assets
///
/// Register a new asset. It always starts AVAILABLE.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AssetDraft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Asset>>)> {
    let Json(draft) = payload?;
    let asset = state.inventory.assets.create(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    let assets = state.inventory.assets.list().await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/search?name=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    let assets = state.inventory.assets.search(&params.name).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = state.inventory.assets.get(id).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// PUT /api/v1/assets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<AssetDraft>, JsonRejection>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let Json(draft) = payload?;
    let asset = state.inventory.assets.update(id, draft).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
///
/// Refused with 409 while the asset is assigned.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.inventory.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/assets/{id}/assign/{employee_id}
pub async fn assign(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = state.inventory.assets.assign(id, employee_id).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/assets/{id}/recover
pub async fn recover(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = state.inventory.assets.recover(id).await?;
    Ok(Json(DataResponse { data: asset }))
}
