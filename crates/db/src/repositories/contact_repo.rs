//! Repository for the `contacts` table.

use async_trait::async_trait;
use contacts_core::contact::{Contact, CreateContact};
use contacts_core::error::CoreError;
use contacts_core::store::ContactStore;
use contacts_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::ContactRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone";

/// PostgreSQL-backed [`ContactStore`].
#[derive(Clone)]
pub struct PgContactRepo {
    pool: PgPool,
}

impl PgContactRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch at most one contact whose `column` equals `value`, lowest id first.
    async fn find_one_by(
        &self,
        column: &'static str,
        value: &str,
    ) -> Result<Option<Contact>, CoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM contacts WHERE {column} = $1 ORDER BY id LIMIT 1");
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(Contact::from))
    }

    /// Set a single text column on contact `id`, returning the updated row.
    async fn set_column(
        &self,
        id: DbId,
        column: &'static str,
        value: &str,
    ) -> Result<Option<Contact>, CoreError> {
        let query = format!("UPDATE contacts SET {column} = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(Contact::from))
    }
}

#[async_trait]
impl ContactStore for PgContactRepo {
    async fn fetch_all(&self) -> Result<Vec<Contact>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY id");
        let rows = sqlx::query_as::<_, ContactRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn fetch_by_id(&self, id: DbId) -> Result<Option<Contact>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(Contact::from))
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Option<Contact>, CoreError> {
        self.find_one_by("email", email).await
    }

    async fn fetch_by_phone(&self, phone: &str) -> Result<Option<Contact>, CoreError> {
        self.find_one_by("phone", phone).await
    }

    async fn insert(&self, input: CreateContact) -> Result<Contact, CoreError> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.into())
    }

    async fn replace(&self, contact: Contact) -> Result<Option<Contact>, CoreError> {
        let query = format!(
            "UPDATE contacts SET name = $2, email = $3, phone = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(contact.id)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(Contact::from))
    }

    async fn update_email(&self, id: DbId, email: &str) -> Result<Option<Contact>, CoreError> {
        self.set_column(id, "email", email).await
    }

    async fn update_phone(&self, id: DbId, phone: &str) -> Result<Option<Contact>, CoreError> {
        self.set_column(id, "phone", phone).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(db_error)
    }
}

/// Any sqlx failure here is a backend fault; absence is expressed as `None`.
fn db_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Database error: {err}"))
}
