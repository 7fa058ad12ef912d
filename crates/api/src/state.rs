use std::sync::Arc;

use crate::auth::google::IdentityProvider;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: allnote_db::DbPool,
    /// Server configuration (JWT secrets, cookie settings, client origin).
    pub config: Arc<ServerConfig>,
    /// Identity provider used by the OAuth callback.
    pub identity: Arc<dyn IdentityProvider>,
}
