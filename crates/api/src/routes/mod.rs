pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contacts                          list, create
/// /contacts/{id}                     get, replace, delete
/// /contacts/by-email/{email}         lookup by email
/// /contacts/by-phone/{phone}         lookup by phone
/// /contacts/{id}/email               update email (PATCH)
/// /contacts/{id}/phone               update phone (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contacts", contact::router())
}
