pub mod assets;
pub mod categories;
pub mod employees;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list, create
/// /categories/{id}                                 get, update, delete
///
/// /employees                                       list, create
///
/// /assets                                          list, create
/// /assets/search?name=                             case-insensitive name search
/// /assets/{id}                                     get, update, delete
/// /assets/{id}/assign/{employee_id}                assign to employee (POST)
/// /assets/{id}/recover                             recover from holder (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/employees", employees::router())
        .nest("/assets", assets::router())
}
