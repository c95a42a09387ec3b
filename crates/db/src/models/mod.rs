//! Database row types.

pub mod contact;
