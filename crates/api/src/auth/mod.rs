//! Authentication primitives.
//!
//! - [`jwt`] -- access/refresh token generation and validation.
//! - [`cookies`] -- building, clearing and reading the auth cookies.
//! - [`google`] -- the identity provider used by the OAuth callback.

pub mod cookies;
pub mod google;
pub mod jwt;
