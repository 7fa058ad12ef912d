pub mod auth;
pub mod department;
pub mod job_application;
pub mod meeting;
pub mod note;
pub mod project;
pub mod project_task;
pub mod todo;
pub mod user;
