//! Contact service: validation and storage orchestration.
//!
//! Every operation validates its input before touching the store, so a
//! malformed email or phone is reported as [`CoreError::Validation`] and never
//! as not-found. Storage absence maps to [`CoreError::NotFound`].

use std::sync::Arc;

use crate::contact::{Contact, CreateContact, ReplaceContact};
use crate::error::CoreError;
use crate::store::ContactStore;
use crate::types::DbId;
use crate::validation::{validate_contact_fields, validate_email, validate_phone};

const ENTITY: &str = "Contact";

/// Stateless service over an injected [`ContactStore`].
///
/// Cheap to clone; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// List every contact. An empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<Contact>, CoreError> {
        self.store.fetch_all().await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Contact, CoreError> {
        self.store
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| CoreError::contact_not_found(id))
    }

    /// Look up a contact by exact email after checking the email format.
    pub async fn get_by_email(&self, email: &str) -> Result<Contact, CoreError> {
        validate_email(Some(email))?;
        tracing::debug!(email, "Looking up contact by email");

        self.store
            .fetch_by_email(email)
            .await?
            .ok_or_else(|| not_found("email", email))
    }

    /// Look up a contact by exact phone after checking the phone format.
    pub async fn get_by_phone(&self, phone: &str) -> Result<Contact, CoreError> {
        validate_phone(Some(phone))?;
        tracing::debug!(phone, "Looking up contact by phone");

        self.store
            .fetch_by_phone(phone)
            .await?
            .ok_or_else(|| not_found("phone", phone))
    }

    /// Create a contact. Present, non-empty email and phone values must be valid.
    pub async fn create(&self, input: CreateContact) -> Result<Contact, CoreError> {
        validate_contact_fields(input.email.as_deref(), input.phone.as_deref())?;

        let contact = self.store.insert(input).await?;
        tracing::info!(contact_id = contact.id, "Contact created");
        Ok(contact)
    }

    /// Replace every field of contact `id`.
    ///
    /// The body id must match `id`; a missing body id counts as a mismatch.
    pub async fn replace(&self, id: DbId, input: ReplaceContact) -> Result<Contact, CoreError> {
        if input.id != Some(id) {
            return Err(CoreError::Validation(format!(
                "Path id {id} does not match body id"
            )));
        }
        validate_contact_fields(input.email.as_deref(), input.phone.as_deref())?;

        let contact = self
            .store
            .replace(Contact::from_replacement(id, input))
            .await?
            .ok_or_else(|| CoreError::contact_not_found(id))?;
        tracing::info!(contact_id = id, "Contact replaced");
        Ok(contact)
    }

    /// Set only the email of contact `id`. A `None` value is rejected.
    pub async fn update_email(&self, id: DbId, email: Option<&str>) -> Result<Contact, CoreError> {
        validate_email(email)?;
        let email = email.unwrap_or_default();

        let contact = self
            .store
            .update_email(id, email)
            .await?
            .ok_or_else(|| CoreError::contact_not_found(id))?;
        tracing::info!(contact_id = id, "Contact email updated");
        Ok(contact)
    }

    /// Set only the phone of contact `id`. A `None` value is rejected.
    pub async fn update_phone(&self, id: DbId, phone: Option<&str>) -> Result<Contact, CoreError> {
        validate_phone(phone)?;
        let phone = phone.unwrap_or_default();

        let contact = self
            .store
            .update_phone(id, phone)
            .await?
            .ok_or_else(|| CoreError::contact_not_found(id))?;
        tracing::info!(contact_id = id, "Contact phone updated");
        Ok(contact)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if !self.store.delete_by_id(id).await? {
            return Err(CoreError::contact_not_found(id));
        }
        tracing::info!(contact_id = id, "Contact deleted");
        Ok(())
    }

    /// Whether the backing store answers a ping.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Contact store ping failed");
                false
            }
        }
    }
}

fn not_found(field: &'static str, value: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        field,
        value: value.to_string(),
    }
}
