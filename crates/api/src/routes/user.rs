//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// PUT    /                  -> upsert (keyed by email)
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /department/{id}   -> list_by_department
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create).put(user::upsert))
        .route(
            "/{id}",
            get(user::get_by_id).patch(user::update).delete(user::delete),
        )
        .route("/department/{id}", get(user::list_by_department))
}
