use crate::types::DbId;

/// Error taxonomy shared by every service in the crate.
///
/// Services surface these immediately; nothing is retried or partially
/// applied. The HTTP layer maps each variant to a status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Caller-supplied data failed a precondition before any store lookup.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A referenced entity does not exist in its store.
    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The requested transition is not permitted from the current state.
    #[error("{0}")]
    InvalidState(String),

    /// The store rejected a write because of a uniqueness or reference constraint.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Convenience alias used by services and store implementations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_first() {
        let err = CoreError::not_found("Category", 999);
        assert_eq!(err.to_string(), "Category not found with id 999");
    }

    #[test]
    fn invalid_state_message_is_verbatim() {
        let err = CoreError::InvalidState("Asset is already assigned".into());
        assert_eq!(err.to_string(), "Asset is already assigned");
    }
}
