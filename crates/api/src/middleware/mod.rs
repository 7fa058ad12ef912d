//! Request extractors shared by handlers.
//!
//! - [`auth::AuthUser`] -- Resolves the signed-in user from an access token.

pub mod auth;
