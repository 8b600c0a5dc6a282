//! In-process implementation of the inventory stores.
//!
//! Enforces the same constraints as the PostgreSQL schema (unique category
//! names, employee primary keys, category references that block deletion,
//! the status/holder pairing) so services behave identically on either
//! backend. Rows are kept in id order, which is the order listings use.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Asset, Category, CategoryDraft, Employee, NewAsset};
use super::status::AssignmentStatus;
use super::store::{AssetStore, CategoryStore, EmployeeStore};
use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

/// Asset row as stored: references by id, resolved on read.
#[derive(Debug, Clone)]
struct AssetRow {
    name: String,
    purchase_date: Option<NaiveDate>,
    condition_notes: Option<String>,
    category_id: DbId,
    status: AssignmentStatus,
    employee_id: Option<DbId>,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    employees: BTreeMap<DbId, Employee>,
    assets: BTreeMap<DbId, AssetRow>,
    next_category_id: DbId,
    next_asset_id: DbId,
}

impl Tables {
    fn name_taken(&self, name: &str, except: Option<DbId>) -> bool {
        self.categories
            .values()
            .any(|c| c.name == name && Some(c.id) != except)
    }

    fn check_references(&self, row: &AssetRow) -> CoreResult<()> {
        if !self.categories.contains_key(&row.category_id) {
            return Err(CoreError::Conflict(format!(
                "Asset references missing category {}",
                row.category_id
            )));
        }
        if let Some(employee_id) = row.employee_id {
            if !self.employees.contains_key(&employee_id) {
                return Err(CoreError::Conflict(format!(
                    "Asset references missing employee {employee_id}"
                )));
            }
        }
        if (row.status == AssignmentStatus::Assigned) != row.employee_id.is_some() {
            return Err(CoreError::Conflict(format!(
                "Asset status {} does not match its holder",
                row.status
            )));
        }
        Ok(())
    }

    fn materialize(&self, id: DbId, row: &AssetRow) -> CoreResult<Asset> {
        let category = self
            .categories
            .get(&row.category_id)
            .cloned()
            .ok_or_else(|| {
                CoreError::Internal(format!("asset {id} has dangling category reference"))
            })?;
        let assigned_to = match row.employee_id {
            Some(employee_id) => Some(self.employees.get(&employee_id).cloned().ok_or_else(
                || CoreError::Internal(format!("asset {id} has dangling employee reference")),
            )?),
            None => None,
        };
        Ok(Asset {
            id,
            name: row.name.clone(),
            purchase_date: row.purchase_date,
            condition_notes: row.condition_notes.clone(),
            category,
            assignment_status: row.status,
            assigned_to,
        })
    }
}

/// Thread-safe in-memory store implementing every inventory store trait.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| CoreError::Internal("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl CategoryStore for InMemoryStore {
    async fn insert_category(&self, input: &CategoryDraft) -> CoreResult<Category> {
        let mut tables = self.lock()?;
        if tables.name_taken(&input.name, None) {
            return Err(CoreError::Conflict(format!(
                "Category name '{}' already exists",
                input.name
            )));
        }
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            name: input.name.clone(),
            description: input.description.clone(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: DbId,
        input: &CategoryDraft,
    ) -> CoreResult<Option<Category>> {
        let mut tables = self.lock()?;
        if !tables.categories.contains_key(&id) {
            return Ok(None);
        }
        if tables.name_taken(&input.name, Some(id)) {
            return Err(CoreError::Conflict(format!(
                "Category name '{}' already exists",
                input.name
            )));
        }
        let category = Category {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
        };
        tables.categories.insert(id, category.clone());
        Ok(Some(category))
    }

    async fn find_category(&self, id: DbId) -> CoreResult<Option<Category>> {
        Ok(self.lock()?.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> CoreResult<Vec<Category>> {
        Ok(self.lock()?.categories.values().cloned().collect())
    }

    async fn delete_category(&self, id: DbId) -> CoreResult<bool> {
        let mut tables = self.lock()?;
        let referenced = tables.assets.values().filter(|a| a.category_id == id).count();
        if referenced > 0 {
            return Err(CoreError::Conflict(format!(
                "Category {id} is still referenced by {referenced} asset(s)"
            )));
        }
        Ok(tables.categories.remove(&id).is_some())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn insert_employee(&self, employee: &Employee) -> CoreResult<Employee> {
        let mut tables = self.lock()?;
        if tables.employees.contains_key(&employee.id) {
            return Err(CoreError::Conflict(format!(
                "Employee with id {} already exists",
                employee.id
            )));
        }
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn find_employee(&self, id: DbId) -> CoreResult<Option<Employee>> {
        Ok(self.lock()?.employees.get(&id).cloned())
    }

    async fn list_employees(&self) -> CoreResult<Vec<Employee>> {
        Ok(self.lock()?.employees.values().cloned().collect())
    }
}

#[async_trait]
impl AssetStore for InMemoryStore {
    async fn insert_asset(&self, input: &NewAsset) -> CoreResult<Asset> {
        let mut tables = self.lock()?;
        let row = AssetRow {
            name: input.name.clone(),
            purchase_date: input.purchase_date,
            condition_notes: input.condition_notes.clone(),
            category_id: input.category_id,
            status: AssignmentStatus::default(),
            employee_id: None,
        };
        tables.check_references(&row)?;
        tables.next_asset_id += 1;
        let id = tables.next_asset_id;
        let asset = tables.materialize(id, &row)?;
        tables.assets.insert(id, row);
        Ok(asset)
    }

    async fn update_asset(&self, asset: &Asset) -> CoreResult<Option<Asset>> {
        let mut tables = self.lock()?;
        if !tables.assets.contains_key(&asset.id) {
            return Ok(None);
        }
        let row = AssetRow {
            name: asset.name.clone(),
            purchase_date: asset.purchase_date,
            condition_notes: asset.condition_notes.clone(),
            category_id: asset.category.id,
            status: asset.assignment_status,
            employee_id: asset.assigned_to.as_ref().map(|e| e.id),
        };
        tables.check_references(&row)?;
        let stored = tables.materialize(asset.id, &row)?;
        tables.assets.insert(asset.id, row);
        Ok(Some(stored))
    }

    async fn find_asset(&self, id: DbId) -> CoreResult<Option<Asset>> {
        let tables = self.lock()?;
        tables
            .assets
            .get(&id)
            .map(|row| tables.materialize(id, row))
            .transpose()
    }

    async fn list_assets(&self) -> CoreResult<Vec<Asset>> {
        let tables = self.lock()?;
        tables
            .assets
            .iter()
            .map(|(id, row)| tables.materialize(*id, row))
            .collect()
    }

    async fn search_assets(&self, fragment: &str) -> CoreResult<Vec<Asset>> {
        let needle = fragment.to_lowercase();
        let tables = self.lock()?;
        tables
            .assets
            .iter()
            .filter(|(_, row)| row.name.to_lowercase().contains(&needle))
            .map(|(id, row)| tables.materialize(*id, row))
            .collect()
    }

    async fn delete_asset(&self, id: DbId) -> CoreResult<bool> {
        Ok(self.lock()?.assets.remove(&id).is_some())
    }
}
