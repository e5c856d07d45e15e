use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with slug '{slug}'")]
    SlugNotFound { entity: &'static str, slug: String },

    /// A singleton record (navigation, hero, about, contact info) has not
    /// been created yet. `what` is the human-readable name of the content.
    #[error("No {what} found")]
    Unset { what: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
