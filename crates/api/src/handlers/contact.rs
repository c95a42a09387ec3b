//! Handlers for the `/contacts` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use contacts_core::contact::{Contact, CreateContact, ReplaceContact};
use contacts_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{FieldValue, Path};
use crate::state::AppState;

/// GET /contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = state.contacts.list().await?;
    Ok(Json(contacts))
}

/// GET /contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    let contact = state.contacts.get_by_id(id).await?;
    Ok(Json(contact))
}

/// GET /contacts/by-email/{email}
///
/// Rejects a malformed email with 400 before any lookup happens.
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Contact>> {
    let contact = state.contacts.get_by_email(&email).await?;
    Ok(Json(contact))
}

/// GET /contacts/by-phone/{phone}
pub async fn get_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> AppResult<Json<Contact>> {
    let contact = state.contacts.get_by_phone(&phone).await?;
    Ok(Json(contact))
}

/// POST /contacts
///
/// Responds 201 with a `Location` header pointing at the new record.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<impl IntoResponse> {
    let contact = state.contacts.create(input).await?;
    let location = format!("/contacts/{}", contact.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(contact)))
}

/// PUT /contacts/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceContact>,
) -> AppResult<Json<Contact>> {
    let contact = state.contacts.replace(id, input).await?;
    Ok(Json(contact))
}

/// PATCH /contacts/{id}/email
pub async fn update_email(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    FieldValue(email): FieldValue,
) -> AppResult<Json<Contact>> {
    let contact = state.contacts.update_email(id, email.as_deref()).await?;
    Ok(Json(contact))
}

/// PATCH /contacts/{id}/phone
pub async fn update_phone(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    FieldValue(phone): FieldValue,
) -> AppResult<Json<Contact>> {
    let contact = state.contacts.update_phone(id, phone.as_deref()).await?;
    Ok(Json(contact))
}

/// DELETE /contacts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.contacts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
