//! Translation of sqlx errors into the core error taxonomy.

use tracker_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Map a sqlx error to a [`CoreError`].
///
/// Constraint violations become `Conflict` naming the constraint;
/// everything else is `Internal`.
pub fn map_db_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return CoreError::Conflict(format!(
                    "Operation violates reference constraint: {constraint}"
                ));
            }
            Some(CHECK_VIOLATION) => {
                return CoreError::Conflict(format!(
                    "Operation violates check constraint: {constraint}"
                ));
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}
