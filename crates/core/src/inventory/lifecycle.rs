//! Asset lifecycle service.
//!
//! The single authority for asset state transitions and cross-entity
//! validation. Every operation is read-validate-write against the injected
//! stores and either completes fully or returns an error before writing.

use std::sync::Arc;

use super::model::{Asset, AssetDraft, Category, NewAsset};
use super::status::AssignmentStatus;
use super::store::{AssetStore, CategoryStore, EmployeeStore};
use super::validation::validate_name;
use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

pub const MSG_CATEGORY_REQUIRED: &str = "Category is required with a valid ID";
pub const MSG_ALREADY_ASSIGNED: &str = "Asset is already assigned";
pub const MSG_NOT_ASSIGNED: &str = "Asset is not currently assigned";
pub const MSG_DELETE_ASSIGNED: &str = "Cannot delete asset that is assigned";
pub const MSG_ASSIGN_VIA_UPDATE: &str =
    "Asset can only become ASSIGNED through the assign operation";

#[derive(Clone)]
pub struct AssetService {
    assets: Arc<dyn AssetStore>,
    categories: Arc<dyn CategoryStore>,
    employees: Arc<dyn EmployeeStore>,
}

impl AssetService {
    pub fn new(
        assets: Arc<dyn AssetStore>,
        categories: Arc<dyn CategoryStore>,
        employees: Arc<dyn EmployeeStore>,
    ) -> Self {
        Self {
            assets,
            categories,
            employees,
        }
    }

    /// Register a new asset. The status is always AVAILABLE on creation,
    /// whatever the draft says.
    pub async fn create(&self, draft: AssetDraft) -> CoreResult<Asset> {
        validate_name("name", &draft.name)?;
        let category_id = require_category_id(&draft)?;
        let category = self.resolve_category(category_id).await?;

        let asset = self
            .assets
            .insert_asset(&NewAsset {
                name: draft.name,
                purchase_date: draft.purchase_date,
                condition_notes: draft.condition_notes,
                category_id: category.id,
            })
            .await?;

        tracing::info!(
            asset_id = asset.id,
            category_id = category.id,
            name = %asset.name,
            "Asset created",
        );
        Ok(asset)
    }

    pub async fn list(&self) -> CoreResult<Vec<Asset>> {
        self.assets.list_assets().await
    }

    /// Case-insensitive substring search on the asset name. An empty
    /// fragment matches everything.
    pub async fn search(&self, fragment: &str) -> CoreResult<Vec<Asset>> {
        self.assets.search_assets(fragment).await
    }

    pub async fn get(&self, id: DbId) -> CoreResult<Asset> {
        self.load(id).await
    }

    /// Overwrite the descriptive fields and category of an asset.
    ///
    /// A status in the draft is applied only if the result keeps the
    /// status/holder pairing intact: AVAILABLE or RECOVERED clear the
    /// holder, ASSIGNED is accepted only when the asset already is. No
    /// status keeps the current one.
    pub async fn update(&self, id: DbId, draft: AssetDraft) -> CoreResult<Asset> {
        validate_name("name", &draft.name)?;
        let category_id = require_category_id(&draft)?;

        let current = self.load(id).await?;
        let category = self.resolve_category(category_id).await?;

        let (assignment_status, assigned_to) =
            match (draft.assignment_status, current.assignment_status) {
                (None, status) => (status, current.assigned_to.clone()),
                (Some(AssignmentStatus::Assigned), AssignmentStatus::Assigned) => {
                    (AssignmentStatus::Assigned, current.assigned_to.clone())
                }
                (Some(AssignmentStatus::Assigned), _) => {
                    tracing::warn!(asset_id = id, "Rejected status change to ASSIGNED via update");
                    return Err(CoreError::InvalidState(MSG_ASSIGN_VIA_UPDATE.to_string()));
                }
                (Some(status), _) => (status, None),
            };

        let candidate = Asset {
            id,
            name: draft.name,
            purchase_date: draft.purchase_date,
            condition_notes: draft.condition_notes,
            category,
            assignment_status,
            assigned_to,
        };

        let asset = self.persist(candidate).await?;
        tracing::info!(
            asset_id = id,
            status = %asset.assignment_status,
            "Asset updated",
        );
        Ok(asset)
    }

    /// Delete an asset permanently. Assigned assets must be recovered first.
    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        let asset = self.load(id).await?;
        if !asset.assignment_status.can_delete() {
            tracing::warn!(asset_id = id, "Rejected delete of assigned asset");
            return Err(CoreError::InvalidState(MSG_DELETE_ASSIGNED.to_string()));
        }

        if !self.assets.delete_asset(id).await? {
            return Err(CoreError::not_found("Asset", id));
        }
        tracing::info!(asset_id = id, "Asset deleted");
        Ok(())
    }

    /// Hand an AVAILABLE or RECOVERED asset to an employee.
    pub async fn assign(&self, asset_id: DbId, employee_id: DbId) -> CoreResult<Asset> {
        let mut asset = self.load(asset_id).await?;
        if !asset.assignment_status.can_assign() {
            tracing::warn!(asset_id, employee_id, "Rejected assign of assigned asset");
            return Err(CoreError::InvalidState(MSG_ALREADY_ASSIGNED.to_string()));
        }

        let employee = self
            .employees
            .find_employee(employee_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Employee", employee_id))?;

        asset.assignment_status = AssignmentStatus::Assigned;
        asset.assigned_to = Some(employee);

        let asset = self.persist(asset).await?;
        tracing::info!(asset_id, employee_id, "Asset assigned");
        Ok(asset)
    }

    /// Take an assigned asset back from its holder.
    pub async fn recover(&self, asset_id: DbId) -> CoreResult<Asset> {
        let mut asset = self.load(asset_id).await?;
        if !asset.assignment_status.can_recover() {
            tracing::warn!(
                asset_id,
                status = %asset.assignment_status,
                "Rejected recover of unassigned asset",
            );
            return Err(CoreError::InvalidState(MSG_NOT_ASSIGNED.to_string()));
        }

        let previous_holder = asset.assigned_to.take().map(|e| e.id);
        asset.assignment_status = AssignmentStatus::Recovered;

        let asset = self.persist(asset).await?;
        tracing::info!(asset_id, ?previous_holder, "Asset recovered");
        Ok(asset)
    }

    // -- helpers --

    async fn load(&self, id: DbId) -> CoreResult<Asset> {
        self.assets
            .find_asset(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Asset", id))
    }

    async fn resolve_category(&self, id: DbId) -> CoreResult<Category> {
        self.categories
            .find_category(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Category", id))
    }

    async fn persist(&self, asset: Asset) -> CoreResult<Asset> {
        let id = asset.id;
        self.assets
            .update_asset(&asset)
            .await?
            .ok_or_else(|| CoreError::not_found("Asset", id))
    }
}

fn require_category_id(draft: &AssetDraft) -> CoreResult<DbId> {
    draft
        .category_id()
        .ok_or_else(|| CoreError::InvalidInput(MSG_CATEGORY_REQUIRED.to_string()))
}
