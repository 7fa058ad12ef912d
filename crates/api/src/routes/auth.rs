//! Route definitions for the `/auth` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// GET /google    -> google_callback (OAuth redirect target)
/// GET /refresh   -> refresh (refresh_token cookie)
/// GET /logout    -> logout
/// GET /users     -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/google", get(auth::google_callback))
        .route("/refresh", get(auth::refresh))
        .route("/logout", get(auth::logout))
        .route("/users", get(auth::me))
}
