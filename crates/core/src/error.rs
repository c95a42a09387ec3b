#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with {field} {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing contact looked up by primary key.
    pub fn contact_not_found(id: crate::types::DbId) -> Self {
        Self::NotFound {
            entity: "Contact",
            field: "id",
            value: id.to_string(),
        }
    }
}
