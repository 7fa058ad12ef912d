//! Route definitions for the `/project-tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_task;
use crate::state::AppState;

/// Routes mounted at `/project-tasks`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /project/{id}  -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_task::list).post(project_task::create))
        .route(
            "/{id}",
            get(project_task::get_by_id)
                .patch(project_task::update)
                .delete(project_task::delete),
        )
        .route("/project/{id}", get(project_task::list_by_project))
}
