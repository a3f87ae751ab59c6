//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- requires a valid JWT Bearer token.
//! - [`auth::CurrentRequester`] -- accepts anonymous requests, rejects bad tokens.

pub mod auth;
