//! Asset rows, joined with their category and holder.

use chrono::NaiveDate;
use sqlx::FromRow;
use tracker_core::error::CoreError;
use tracker_core::inventory::model::{Asset, Category, Employee};
use tracker_core::inventory::AssignmentStatus;
use tracker_core::types::{DbId, StatusId};

/// An `assets` row with the category columns (always present) and the
/// employee columns (present only while assigned) flattened in.
#[derive(Debug, Clone, FromRow)]
pub struct AssetRow {
    pub id: DbId,
    pub name: String,
    pub purchase_date: Option<NaiveDate>,
    pub condition_notes: Option<String>,
    pub assignment_status_id: StatusId,
    pub category_id: DbId,
    pub category_name: String,
    pub category_description: Option<String>,
    pub employee_id: Option<DbId>,
    pub employee_full_name: Option<String>,
    pub employee_designation: Option<String>,
}

impl TryFrom<AssetRow> for Asset {
    type Error = CoreError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let assignment_status =
            AssignmentStatus::from_id(row.assignment_status_id).ok_or_else(|| {
                CoreError::Internal(format!(
                    "asset {} has unknown assignment_status_id {}",
                    row.id, row.assignment_status_id
                ))
            })?;

        let assigned_to = match (row.employee_id, row.employee_full_name) {
            (Some(id), Some(full_name)) => Some(Employee {
                id,
                full_name,
                designation: row.employee_designation,
            }),
            _ => None,
        };

        Ok(Self {
            id: row.id,
            name: row.name,
            purchase_date: row.purchase_date,
            condition_notes: row.condition_notes,
            category: Category {
                id: row.category_id,
                name: row.category_name,
                description: row.category_description,
            },
            assignment_status,
            assigned_to,
        })
    }
}
