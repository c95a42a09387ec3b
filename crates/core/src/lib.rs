//! Domain layer for the contacts service.
//!
//! Holds the [`contact::Contact`] model, field validation, the storage port
//! that persistence adapters implement, and the service that orchestrates
//! validation and storage calls for every HTTP operation.

pub mod contact;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
