//! Route definitions for the `/jobApplications` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::job_application;
use crate::state::AppState;

/// Routes mounted at `/jobApplications`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /manager/{id}  -> list_by_manager
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(job_application::list).post(job_application::create))
        .route(
            "/{id}",
            get(job_application::get_by_id)
                .patch(job_application::update)
                .delete(job_application::delete),
        )
        .route("/manager/{id}", get(job_application::list_by_manager))
}
