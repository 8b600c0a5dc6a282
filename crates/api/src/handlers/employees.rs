//! Handlers for the `/employees` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracker_core::inventory::model::{Employee, NewEmployee};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Employee>>)> {
    let Json(input) = payload?;
    let employee = state.inventory.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// GET /api/v1/employees
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Employee>>>> {
    let employees = state.inventory.employees.list().await?;
    Ok(Json(DataResponse { data: employees }))
}
