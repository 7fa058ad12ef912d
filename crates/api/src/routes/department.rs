//! Route definitions for the `/departments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// Routes mounted at `/departments`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /parent/{id}   -> list_by_parent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(department::list).post(department::create))
        .route(
            "/{id}",
            get(department::get_by_id)
                .patch(department::update)
                .delete(department::delete),
        )
        .route("/parent/{id}", get(department::list_by_parent))
}
