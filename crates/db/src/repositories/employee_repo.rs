//! Repository for the `employees` table.

use sqlx::PgPool;
use tracker_core::inventory::model::Employee;
use tracker_core::types::DbId;

use crate::models::employee::EmployeeRow;

/// Column list for employees queries.
const COLUMNS: &str = "id, full_name, designation";

/// Provides create/read operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List all employees, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id ASC");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an employee by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an employee under its caller-supplied ID.
    pub async fn create(pool: &PgPool, input: &Employee) -> Result<EmployeeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (id, full_name, designation)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(input.id)
            .bind(&input.full_name)
            .bind(&input.designation)
            .fetch_one(pool)
            .await
    }
}
