//! PostgreSQL implementation of the core store traits.

use async_trait::async_trait;
use tracker_core::error::CoreResult;
use tracker_core::inventory::model::{Asset, Category, CategoryDraft, Employee, NewAsset};
use tracker_core::inventory::store::{AssetStore, CategoryStore, EmployeeStore};
use tracker_core::types::DbId;

use crate::errors::map_db_error;
use crate::models::asset::AssetRow;
use crate::repositories::{AssetRepo, CategoryRepo, EmployeeRepo};
use crate::DbPool;

/// Store handle backed by a connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn into_assets(rows: Vec<AssetRow>) -> CoreResult<Vec<Asset>> {
    rows.into_iter().map(Asset::try_from).collect()
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn insert_category(&self, input: &CategoryDraft) -> CoreResult<Category> {
        let row = CategoryRepo::create(&self.pool, input)
            .await
            .map_err(map_db_error)?;
        Ok(row.into())
    }

    async fn update_category(
        &self,
        id: DbId,
        input: &CategoryDraft,
    ) -> CoreResult<Option<Category>> {
        let row = CategoryRepo::update(&self.pool, id, input)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(Into::into))
    }

    async fn find_category(&self, id: DbId) -> CoreResult<Option<Category>> {
        let row = CategoryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(Into::into))
    }

    async fn list_categories(&self) -> CoreResult<Vec<Category>> {
        let rows = CategoryRepo::list(&self.pool).await.map_err(map_db_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_category(&self, id: DbId) -> CoreResult<bool> {
        CategoryRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl EmployeeStore for PgStore {
    async fn insert_employee(&self, employee: &Employee) -> CoreResult<Employee> {
        let row = EmployeeRepo::create(&self.pool, employee)
            .await
            .map_err(map_db_error)?;
        Ok(row.into())
    }

    async fn find_employee(&self, id: DbId) -> CoreResult<Option<Employee>> {
        let row = EmployeeRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(Into::into))
    }

    async fn list_employees(&self) -> CoreResult<Vec<Employee>> {
        let rows = EmployeeRepo::list(&self.pool).await.map_err(map_db_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl AssetStore for PgStore {
    async fn insert_asset(&self, input: &NewAsset) -> CoreResult<Asset> {
        let row = AssetRepo::create(&self.pool, input)
            .await
            .map_err(map_db_error)?;
        Asset::try_from(row)
    }

    async fn update_asset(&self, asset: &Asset) -> CoreResult<Option<Asset>> {
        let row = AssetRepo::update(&self.pool, asset)
            .await
            .map_err(map_db_error)?;
        row.map(Asset::try_from).transpose()
    }

    async fn find_asset(&self, id: DbId) -> CoreResult<Option<Asset>> {
        let row = AssetRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)?;
        row.map(Asset::try_from).transpose()
    }

    async fn list_assets(&self) -> CoreResult<Vec<Asset>> {
        into_assets(AssetRepo::list(&self.pool).await.map_err(map_db_error)?)
    }

    async fn search_assets(&self, fragment: &str) -> CoreResult<Vec<Asset>> {
        into_assets(
            AssetRepo::search_by_name(&self.pool, fragment)
                .await
                .map_err(map_db_error)?,
        )
    }

    async fn delete_asset(&self, id: DbId) -> CoreResult<bool> {
        AssetRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }
}
