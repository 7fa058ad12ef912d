pub mod auth;
pub mod department;
pub mod health;
pub mod job_application;
pub mod meeting;
pub mod note;
pub mod project;
pub mod project_task;
pub mod todo;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/google                        OAuth callback (public)
/// /auth/refresh                       refresh access token (cookie)
/// /auth/logout                        clear auth cookies
/// /auth/users                         current user (requires auth)
///
/// /users                              list, create, upsert (PUT)
/// /users/{id}                         get, update, delete
/// /users/department/{id}              users in a department
///
/// /departments                        list, create
/// /departments/{id}                   get, update, delete
/// /departments/parent/{id}            child departments
///
/// /notes                              list, create
/// /notes/{id}                         get, update, delete
/// /notes/user/{id}                    notes by author
///
/// /todos                              list, create
/// /todos/{id}                         get, update, delete
/// /todos/user/{id}                    todos by assignee
///
/// /projects                           list, create
/// /projects/{id}                      get, update, delete
///
/// /project-tasks                      list, create
/// /project-tasks/{id}                 get, update, delete
/// /project-tasks/project/{id}         tasks of a project
///
/// /meetings                           list, create
/// /meetings/{id}                      get, update, delete
/// /meetings/user/{id}                 meetings by creator
///
/// /jobApplications                    list, create
/// /jobApplications/{id}               get, update, delete
/// /jobApplications/manager/{id}       applications by hiring manager
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/departments", department::router())
        .nest("/notes", note::router())
        .nest("/todos", todo::router())
        .nest("/projects", project::router())
        .nest("/project-tasks", project_task::router())
        .nest("/meetings", meeting::router())
        .nest("/jobApplications", job_application::router())
}
