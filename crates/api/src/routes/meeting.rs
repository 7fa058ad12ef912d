//! Route definitions for the `/meetings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meeting;
use crate::state::AppState;

/// Routes mounted at `/meetings`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /user/{id}     -> list_by_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meeting::list).post(meeting::create))
        .route(
            "/{id}",
            get(meeting::get_by_id)
                .patch(meeting::update)
                .delete(meeting::delete),
        )
        .route("/user/{id}", get(meeting::list_by_user))
}
