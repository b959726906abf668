use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed for {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
