//! Pure domain logic for the Coursehub backend.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers call into
//! these modules for validation, access decisions, and shared types.

pub mod catalog;
pub mod error;
pub mod payment;
pub mod progress;
pub mod roles;
pub mod types;
pub mod visibility;
