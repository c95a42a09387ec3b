//! Route definitions for the `/contacts` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> replace
/// DELETE /{id}              -> delete
/// GET    /by-email/{email}  -> get_by_email
/// GET    /by-phone/{phone}  -> get_by_phone
/// PATCH  /{id}/email        -> update_email
/// PATCH  /{id}/phone        -> update_phone
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route(
            "/{id}",
            get(contact::get_by_id)
                .put(contact::replace)
                .delete(contact::delete),
        )
        .route("/by-email/{email}", get(contact::get_by_email))
        .route("/by-phone/{phone}", get(contact::get_by_phone))
        .route("/{id}/email", patch(contact::update_email))
        .route("/{id}/phone", patch(contact::update_phone))
}
