//! Route definitions for assets.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /search?name=              -> search
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/assign/{employee_id} -> assign
/// POST   /{id}/recover              -> recover
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list).post(assets::create))
        .route("/search", get(assets::search))
        .route(
            "/{id}",
            get(assets::get_by_id)
                .put(assets::update)
                .delete(assets::delete),
        )
        .route("/{id}/assign/{employee_id}", post(assets::assign))
        .route("/{id}/recover", post(assets::recover))
}
