//! Storage port for contact persistence.
//!
//! The [`ContactStore`] trait is the only way the service reaches stored
//! contacts. Adapters in `contacts-db` implement it over an in-memory map or
//! PostgreSQL; tests substitute a mock.

use async_trait::async_trait;

use crate::contact::{Contact, CreateContact};
use crate::error::CoreError;
use crate::types::DbId;

/// Port for contact storage and retrieval.
///
/// Lookups that find nothing return `Ok(None)` (or `Ok(false)` for deletes);
/// `Err` is reserved for backend faults and is reported as
/// [`CoreError::Internal`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch every stored contact, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<Contact>, CoreError>;

    async fn fetch_by_id(&self, id: DbId) -> Result<Option<Contact>, CoreError>;

    /// Exact-match lookup. Case sensitivity is a property of the backend.
    async fn fetch_by_email(&self, email: &str) -> Result<Option<Contact>, CoreError>;

    /// Exact-match lookup on the stored phone string.
    async fn fetch_by_phone(&self, phone: &str) -> Result<Option<Contact>, CoreError>;

    /// Insert a new contact, assigning its id.
    async fn insert(&self, input: CreateContact) -> Result<Contact, CoreError>;

    /// Overwrite every field of the contact with `contact.id`.
    ///
    /// Returns `None` if no such contact exists.
    async fn replace(&self, contact: Contact) -> Result<Option<Contact>, CoreError>;

    async fn update_email(&self, id: DbId, email: &str) -> Result<Option<Contact>, CoreError>;

    async fn update_phone(&self, id: DbId, phone: &str) -> Result<Option<Contact>, CoreError>;

    /// Remove a contact. Returns `true` if a record existed and was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError>;

    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<(), CoreError>;
}
