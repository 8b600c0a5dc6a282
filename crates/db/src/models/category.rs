//! Category rows.

use sqlx::FromRow;
use tracker_core::inventory::model::Category;
use tracker_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
