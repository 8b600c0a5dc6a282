//! Employee rows.

use sqlx::FromRow;
use tracker_core::inventory::model::Employee;
use tracker_core::types::DbId;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: DbId,
    pub full_name: String,
    pub designation: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            designation: row.designation,
        }
    }
}
