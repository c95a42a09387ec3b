use contacts_core::service::ContactService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the service holds its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Contact operations over the configured store.
    pub contacts: ContactService,
}
