use crate::types::DbId;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A uniqueness rule was violated. `field` names the offending input
    /// field when it is known.
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        field: Option<String>,
    },
}
