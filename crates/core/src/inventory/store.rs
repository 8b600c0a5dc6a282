//! Persistence boundary for the inventory services.
//!
//! One trait per entity type. Services receive their stores at
//! construction; implementations (PostgreSQL, in-memory) own all storage
//! details and translate backend failures into [`CoreError`].
//!
//! [`CoreError`]: crate::error::CoreError

use async_trait::async_trait;

use super::model::{Asset, Category, CategoryDraft, Employee, NewAsset};
use crate::error::CoreResult;
use crate::types::DbId;

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a category and return it with its assigned id.
    ///
    /// Fails with `Conflict` when the name is already taken.
    async fn insert_category(&self, input: &CategoryDraft) -> CoreResult<Category>;

    /// Overwrite name and description of an existing category.
    ///
    /// Returns `None` if no category has the given id.
    async fn update_category(
        &self,
        id: DbId,
        input: &CategoryDraft,
    ) -> CoreResult<Option<Category>>;

    async fn find_category(&self, id: DbId) -> CoreResult<Option<Category>>;

    async fn list_categories(&self) -> CoreResult<Vec<Category>>;

    /// Delete a category. Returns `true` if a row was removed.
    ///
    /// Fails with `Conflict` while assets still reference it.
    async fn delete_category(&self, id: DbId) -> CoreResult<bool>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert an employee under its caller-supplied id.
    ///
    /// Fails with `Conflict` when the id is already registered.
    async fn insert_employee(&self, employee: &Employee) -> CoreResult<Employee>;

    async fn find_employee(&self, id: DbId) -> CoreResult<Option<Employee>>;

    async fn list_employees(&self) -> CoreResult<Vec<Employee>>;
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Insert a new asset (AVAILABLE, no holder) and return the stored row.
    async fn insert_asset(&self, input: &NewAsset) -> CoreResult<Asset>;

    /// Persist every mutable field of `asset`, keyed by `asset.id`.
    ///
    /// Returns `None` if the asset no longer exists.
    async fn update_asset(&self, asset: &Asset) -> CoreResult<Option<Asset>>;

    async fn find_asset(&self, id: DbId) -> CoreResult<Option<Asset>>;

    async fn list_assets(&self) -> CoreResult<Vec<Asset>>;

    /// Assets whose name contains `fragment`, ignoring case.
    async fn search_assets(&self, fragment: &str) -> CoreResult<Vec<Asset>>;

    /// Delete an asset. Returns `true` if a row was removed.
    async fn delete_asset(&self, id: DbId) -> CoreResult<bool>;
}
