//! Input checks run before any store lookup.

use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

/// Maximum length accepted for names (matches the `VARCHAR(255)` columns).
pub const MAX_NAME_LEN: usize = 255;

/// Reject blank or over-long names. `field` is used in the error message.
pub fn validate_name(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Employee ids come from outside the system and must be positive.
pub fn validate_employee_id(id: DbId) -> CoreResult<()> {
    if id <= 0 {
        return Err(CoreError::InvalidInput(format!(
            "Employee id must be positive, got {id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert_matches!(validate_name("name", ""), Err(CoreError::InvalidInput(_)));
        assert_matches!(validate_name("name", "   "), Err(CoreError::InvalidInput(_)));
    }

    #[test]
    fn long_names_are_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_matches!(validate_name("name", &long), Err(CoreError::InvalidInput(_)));
        assert!(validate_name("name", &"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn error_mentions_field() {
        let err = validate_name("full_name", "").unwrap_err();
        assert!(err.to_string().contains("full_name"));
    }

    #[test]
    fn employee_id_must_be_positive() {
        assert!(validate_employee_id(1).is_ok());
        assert_matches!(validate_employee_id(0), Err(CoreError::InvalidInput(_)));
        assert_matches!(validate_employee_id(-5), Err(CoreError::InvalidInput(_)));
    }
}
