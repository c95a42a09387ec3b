//! Request handlers.
//!
//! Handlers extract the request, delegate to the [`ContactService`] held in
//! [`AppState`], and map errors via [`AppError`].
//!
//! [`ContactService`]: contacts_core::service::ContactService
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod contact;
