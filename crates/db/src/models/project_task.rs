//! Project task entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::department::DepartmentInfo;
use crate::models::project::ProjectInfo;
use crate::models::user::UserInfo;

/// A project task row with its project, manager and department joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectTask {
    pub id: DbId,
    pub project: Option<DbId>,
    pub project_info: Json<Vec<ProjectInfo>>,
    pub manager: Option<DbId>,
    pub manager_info: Json<Vec<UserInfo>>,
    pub department: Option<DbId>,
    pub department_info: Json<Vec<DepartmentInfo>>,
    pub task_description: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project task. The owning project is mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectTask {
    #[validate(length(min = 1, message = "project is required"))]
    pub project: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub status: String,
}

/// DTO for updating a project task. The owning project is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectTask {
    pub manager: Option<String>,
    pub department: Option<String>,
    pub task_description: Option<String>,
    pub status: Option<String>,
}
