//! Category service: CRUD over the category store.
//!
//! Name uniqueness is left to the store, which reports a clash as
//! `Conflict`. Deletion performs no asset check of its own; the store
//! refuses to drop a category that assets still reference.

use std::sync::Arc;

use super::model::{Category, CategoryDraft};
use super::store::CategoryStore;
use super::validation::validate_name;
use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    pub async fn create(&self, draft: CategoryDraft) -> CoreResult<Category> {
        validate_name("name", &draft.name)?;
        let category = self.categories.insert_category(&draft).await?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn list(&self) -> CoreResult<Vec<Category>> {
        self.categories.list_categories().await
    }

    pub async fn get(&self, id: DbId) -> CoreResult<Category> {
        self.categories
            .find_category(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Category", id))
    }

    /// Overwrite name and description.
    pub async fn update(&self, id: DbId, draft: CategoryDraft) -> CoreResult<Category> {
        validate_name("name", &draft.name)?;
        let category = self
            .categories
            .update_category(id, &draft)
            .await?
            .ok_or_else(|| CoreError::not_found("Category", id))?;
        tracing::info!(category_id = id, "Category updated");
        Ok(category)
    }

    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        if !self.categories.delete_category(id).await? {
            return Err(CoreError::not_found("Category", id));
        }
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::inventory::lifecycle::AssetService;
    use crate::inventory::memory::InMemoryStore;
    use crate::inventory::model::{AssetDraft, CategoryRef};

    fn service() -> (Arc<InMemoryStore>, CategoryService) {
        let store = Arc::new(InMemoryStore::new());
        (store.clone(), CategoryService::new(store))
    }

    fn draft(name: &str, description: Option<&str>) -> CategoryDraft {
        CategoryDraft {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_and_list() {
        let (_, svc) = service();
        let created = svc.create(draft("Electronics", None)).await.unwrap();
        assert_eq!(created.name, "Electronics");

        let all = svc.list().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let (_, svc) = service();
        svc.create(draft("Electronics", None)).await.unwrap();
        assert_matches!(
            svc.create(draft("Electronics", Some("again"))).await,
            Err(CoreError::Conflict(_))
        );
    }

    #[tokio::test]
    async fn blank_name_is_invalid_input() {
        let (_, svc) = service();
        assert_matches!(svc.create(draft("", None)).await, Err(CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_overwrites_name_and_description() {
        let (_, svc) = service();
        let created = svc
            .create(draft("Electronics", Some("old")))
            .await
            .unwrap();

        let updated = svc
            .update(created.id, draft("Computers", None))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Computers");
        assert!(updated.description.is_none());
        assert_eq!(svc.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_or_delete_missing_is_not_found() {
        let (_, svc) = service();
        assert_matches!(
            svc.update(3, draft("X", None)).await,
            Err(CoreError::NotFound { entity: "Category", id: 3 })
        );
        assert_matches!(
            svc.delete(3).await,
            Err(CoreError::NotFound { entity: "Category", id: 3 })
        );
    }

    #[tokio::test]
    async fn delete_is_blocked_while_assets_reference_it() {
        let (store, svc) = service();
        let assets = AssetService::new(store.clone(), store.clone(), store.clone());
        let category = svc.create(draft("Electronics", None)).await.unwrap();
        let asset = assets
            .create(AssetDraft {
                name: "Laptop".into(),
                category: Some(CategoryRef {
                    id: Some(category.id),
                }),
                ..AssetDraft::default()
            })
            .await
            .unwrap();

        assert_matches!(svc.delete(category.id).await, Err(CoreError::Conflict(_)));

        assets.delete(asset.id).await.unwrap();
        svc.delete(category.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
