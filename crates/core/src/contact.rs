//! Contact entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for creating a new contact. Any client-supplied `id` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for a full-replace update. `id` must equal the id in the request path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplaceContact {
    pub id: Option<DbId>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    /// Build the record a replace writes for `id`.
    pub fn from_replacement(id: DbId, input: ReplaceContact) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }
}
