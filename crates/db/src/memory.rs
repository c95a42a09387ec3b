//! In-process contact store.
//!
//! Contacts live in a `BTreeMap` keyed by id behind a Tokio `RwLock`. Ids
//! come from a counter starting at 1 and are never reused, even after a
//! delete. Email and phone lookups are exact, case-sensitive matches.

use std::collections::BTreeMap;

use async_trait::async_trait;
use contacts_core::contact::{Contact, CreateContact};
use contacts_core::error::CoreError;
use contacts_core::store::ContactStore;
use contacts_core::types::DbId;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    next_id: DbId,
    contacts: BTreeMap<DbId, Contact>,
}

/// Default [`ContactStore`] holding every contact in memory.
#[derive(Debug)]
pub struct InMemoryContactStore {
    inner: RwLock<Inner>,
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                contacts: BTreeMap::new(),
            }),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.contacts.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn find_first(&self, matches: impl Fn(&Contact) -> bool) -> Option<Contact> {
        let inner = self.inner.read().await;
        inner.contacts.values().find(|c| matches(*c)).cloned()
    }

    async fn modify(&self, id: DbId, apply: impl FnOnce(&mut Contact)) -> Option<Contact> {
        let mut inner = self.inner.write().await;
        let contact = inner.contacts.get_mut(&id)?;
        apply(contact);
        Some(contact.clone())
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn fetch_all(&self) -> Result<Vec<Contact>, CoreError> {
        Ok(self.inner.read().await.contacts.values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: DbId) -> Result<Option<Contact>, CoreError> {
        Ok(self.inner.read().await.contacts.get(&id).cloned())
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Option<Contact>, CoreError> {
        Ok(self
            .find_first(|c| c.email.as_deref() == Some(email))
            .await)
    }

    async fn fetch_by_phone(&self, phone: &str) -> Result<Option<Contact>, CoreError> {
        Ok(self
            .find_first(|c| c.phone.as_deref() == Some(phone))
            .await)
    }

    async fn insert(&self, input: CreateContact) -> Result<Contact, CoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let contact = Contact {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
        };
        inner.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn replace(&self, contact: Contact) -> Result<Option<Contact>, CoreError> {
        let mut inner = self.inner.write().await;
        match inner.contacts.get_mut(&contact.id) {
            Some(existing) => {
                *existing = contact.clone();
                Ok(Some(contact))
            }
            None => Ok(None),
        }
    }

    async fn update_email(&self, id: DbId, email: &str) -> Result<Option<Contact>, CoreError> {
        Ok(self
            .modify(id, |c| c.email = Some(email.to_string()))
            .await)
    }

    async fn update_phone(&self, id: DbId, phone: &str) -> Result<Option<Contact>, CoreError> {
        Ok(self
            .modify(id, |c| c.phone = Some(phone.to_string()))
            .await)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.inner.write().await.contacts.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contact(name: &str, email: Option<&str>, phone: Option<&str>) -> CreateContact {
        CreateContact {
            name: name.to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryContactStore::new();
        let first = store.insert(new_contact("A", None, None)).await.unwrap();
        let second = store.insert(new_contact("B", None, None)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryContactStore::new();
        let first = store.insert(new_contact("A", None, None)).await.unwrap();
        assert!(store.delete_by_id(first.id).await.unwrap());

        let next = store.insert(new_contact("B", None, None)).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn fetch_all_is_ordered_by_id() {
        let store = InMemoryContactStore::new();
        for name in ["A", "B", "C"] {
            store.insert(new_contact(name, None, None)).await.unwrap();
        }

        let ids: Vec<DbId> = store
            .fetch_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn email_lookup_is_exact_and_case_sensitive() {
        let store = InMemoryContactStore::new();
        store
            .insert(new_contact("A", Some("a@b.com"), None))
            .await
            .unwrap();

        assert!(store.fetch_by_email("a@b.com").await.unwrap().is_some());
        assert!(store.fetch_by_email("A@B.COM").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn phone_lookup_returns_lowest_id_match() {
        let store = InMemoryContactStore::new();
        store
            .insert(new_contact("A", None, Some("111-222-3333")))
            .await
            .unwrap();
        store
            .insert(new_contact("B", None, Some("111-222-3333")))
            .await
            .unwrap();

        let found = store.fetch_by_phone("111-222-3333").await.unwrap().unwrap();
        assert_eq!(found.name, "A");
    }

    #[tokio::test]
    async fn replace_overwrites_every_field() {
        let store = InMemoryContactStore::new();
        let created = store
            .insert(new_contact("A", Some("a@b.com"), Some("111-222-3333")))
            .await
            .unwrap();

        let replacement = Contact {
            id: created.id,
            name: "Renamed".to_string(),
            email: None,
            phone: Some("999-888-7777".to_string()),
        };
        let replaced = store.replace(replacement.clone()).await.unwrap();
        assert_eq!(replaced, Some(replacement.clone()));
        assert_eq!(
            store.fetch_by_id(created.id).await.unwrap(),
            Some(replacement)
        );
    }

    #[tokio::test]
    async fn replace_missing_returns_none() {
        let store = InMemoryContactStore::new();
        let ghost = Contact {
            id: 42,
            name: "Ghost".to_string(),
            email: None,
            phone: None,
        };
        assert!(store.replace(ghost).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_email_is_idempotent() {
        let store = InMemoryContactStore::new();
        let created = store.insert(new_contact("A", None, None)).await.unwrap();

        let first = store
            .update_email(created.id, "new@email.com")
            .await
            .unwrap()
            .unwrap();
        let second = store
            .update_email(created.id, "new@email.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(second.email.as_deref(), Some("new@email.com"));
    }

    #[tokio::test]
    async fn field_updates_on_missing_contact_return_none() {
        let store = InMemoryContactStore::new();
        assert!(store.update_email(999, "a@b.com").await.unwrap().is_none());
        assert!(store
            .update_phone(999, "123-456-7890")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_missing_returns_false() {
        let store = InMemoryContactStore::new();
        assert!(!store.delete_by_id(1).await.unwrap());
    }
}
