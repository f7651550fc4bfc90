//! Request extractors enforcing authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the token subject from a JWT Bearer token.

pub mod auth;
