use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employee routes mounted at `/employees`. No update or delete.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(employees::list).post(employees::create))
}
