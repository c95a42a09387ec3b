//! Repository layer.
//!
//! Each repository wraps a `PgPool` and implements a storage port from
//! `contacts_core`.

pub mod contact_repo;

pub use contact_repo::PgContactRepo;
