//! Route definitions for the `/todos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted at `/todos`.
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
        .route("/", get(todo::list).post(todo::create))
        .route(
            "/{id}",
            get(todo::get_by_id)
                .patch(todo::update)
                .delete(todo::delete),
        )
        .route("/user/{id}", get(todo::list_by_user))
}
