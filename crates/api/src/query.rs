//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?name=` for the asset search endpoint. A missing parameter behaves
/// like an empty fragment and matches every asset.
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    #[serde(default)]
    pub name: String,
}
