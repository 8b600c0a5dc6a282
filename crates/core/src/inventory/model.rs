//! Entity types and write DTOs for categories, employees and assets.
//!
//! Optional columns are `Option`s so every read site has to deal with
//! absence explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::AssignmentStatus;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A named grouping every asset belongs to. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating or replacing a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A person who may hold an assigned asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub full_name: String,
    pub designation: Option<String>,
}

/// DTO for registering an employee. The id is supplied by the caller
/// (typically the HR system's employee number).
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub id: DbId,
    pub full_name: String,
    #[serde(default)]
    pub designation: Option<String>,
}

impl From<NewEmployee> for Employee {
    fn from(input: NewEmployee) -> Self {
        Self {
            id: input.id,
            full_name: input.full_name,
            designation: input.designation,
        }
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// A trackable physical item, with its category and holder resolved.
///
/// `assigned_to` is `Some` exactly when `assignment_status` is
/// [`AssignmentStatus::Assigned`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub purchase_date: Option<NaiveDate>,
    pub condition_notes: Option<String>,
    pub category: Category,
    pub assignment_status: AssignmentStatus,
    pub assigned_to: Option<Employee>,
}

impl Asset {
    /// Whether the asset satisfies the status/holder pairing rule.
    pub fn is_consistent(&self) -> bool {
        (self.assignment_status == AssignmentStatus::Assigned) == self.assigned_to.is_some()
    }
}

/// Reference to a category by id, as it arrives in a request body
/// (`"category": { "id": 3 }`). Either level may be missing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: Option<DbId>,
}

/// Caller-supplied asset fields for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetDraft {
    pub name: String,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub condition_notes: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Ignored on create. On update, applied subject to the holder rule.
    #[serde(default)]
    pub assignment_status: Option<AssignmentStatus>,
}

impl AssetDraft {
    /// The referenced category id, if both the reference and its id are present.
    pub fn category_id(&self) -> Option<DbId> {
        self.category.and_then(|c| c.id)
    }
}

/// Row to insert for a freshly created asset. New assets always start
/// AVAILABLE with no holder, so neither is part of the insert.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub name: String,
    pub purchase_date: Option<NaiveDate>,
    pub condition_notes: Option<String>,
    pub category_id: DbId,
}
