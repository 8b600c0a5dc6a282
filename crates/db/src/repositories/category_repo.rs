//! Repository for the `categories` table.

use sqlx::PgPool;
use tracker_core::inventory::model::CategoryDraft;
use tracker_core::types::DbId;

use crate::models::category::CategoryRow;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CategoryDraft) -> Result<CategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Overwrite name and description, returning the updated row.
    ///
    /// A `None` description clears the column.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryDraft,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = $2,
                description = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
