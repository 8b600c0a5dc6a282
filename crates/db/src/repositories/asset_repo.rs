//! Repository for the `assets` table.
//!
//! Every read joins the category and (optional) holder so callers get a
//! fully resolved row in one round trip.

use sqlx::PgPool;
use tracker_core::inventory::model::{Asset, NewAsset};
use tracker_core::types::DbId;

use crate::models::asset::AssetRow;

/// Select list producing an [`AssetRow`] from `a` (assets), `c`
/// (categories) and `e` (employees).
const SELECT_COLUMNS: &str = "a.id, a.name, a.purchase_date, a.condition_notes, \
     a.assignment_status_id, \
     c.id AS category_id, c.name AS category_name, c.description AS category_description, \
     e.id AS employee_id, e.full_name AS employee_full_name, \
     e.designation AS employee_designation";

/// Join clause attaching category and holder to an asset source aliased `a`.
const JOINS: &str = "JOIN categories c ON c.id = a.category_id \
     LEFT JOIN employees e ON e.id = a.assigned_to";

/// Escape `LIKE` metacharacters so a fragment is matched literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Provides CRUD and search operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// List all assets, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM assets a {JOINS} ORDER BY a.id ASC");
        sqlx::query_as::<_, AssetRow>(&query).fetch_all(pool).await
    }

    /// Find an asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM assets a {JOINS} WHERE a.id = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring match on the name, ordered by id.
    pub async fn search_by_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<AssetRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM assets a {JOINS}
             WHERE a.name ILIKE '%' || $1 || '%' ESCAPE '\\'
             ORDER BY a.id ASC"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(escape_like(fragment))
            .fetch_all(pool)
            .await
    }

    /// Insert a new asset with the default (AVAILABLE) status.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<AssetRow, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                INSERT INTO assets (name, purchase_date, condition_notes, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {SELECT_COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(&input.name)
            .bind(input.purchase_date)
            .bind(&input.condition_notes)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every mutable column of an asset, returning the updated row.
    pub async fn update(pool: &PgPool, asset: &Asset) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                UPDATE assets SET
                    name = $2,
                    purchase_date = $3,
                    condition_notes = $4,
                    category_id = $5,
                    assignment_status_id = $6,
                    assigned_to = $7,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {SELECT_COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(asset.id)
            .bind(&asset.name)
            .bind(asset.purchase_date)
            .bind(&asset.condition_notes)
            .bind(asset.category.id)
            .bind(asset.assignment_status.id())
            .bind(asset.assigned_to.as_ref().map(|e| e.id))
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_text() {
        assert_eq!(escape_like("Laptop"), "Laptop");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_off"), "100\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
