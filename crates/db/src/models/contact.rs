//! Row mapping for the `contacts` table.

use contacts_core::contact::Contact;
use contacts_core::types::DbId;
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactRow {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}
