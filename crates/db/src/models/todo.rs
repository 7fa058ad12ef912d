//! Todo entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::department::DepartmentInfo;
use crate::models::project::ProjectInfo;
use crate::models::user::UserInfo;

/// A todo row with its project, user and department joined in.
///
/// `status` is free text; the client decides the vocabulary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub task: String,
    pub status: String,
    pub project: Option<DbId>,
    pub project_info: Json<Vec<ProjectInfo>>,
    pub user: Option<DbId>,
    pub user_info: Json<Vec<UserInfo>>,
    pub department: Option<DbId>,
    pub department_info: Json<Vec<DepartmentInfo>>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a todo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(length(min = 1, message = "task is required"))]
    pub task: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub department: String,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}

/// DTO for updating a todo.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(length(min = 1, message = "task must not be empty"))]
    pub task: Option<String>,
    pub status: Option<String>,
    pub project: Option<String>,
    pub user: Option<String>,
    pub department: Option<String>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}
