use std::sync::Arc;

use tracker_core::inventory::Inventory;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when the services run on the
    /// in-memory store.
    pub pool: Option<tracker_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Asset, category and employee services.
    pub inventory: Inventory,
}
