//! Job application entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::department::DepartmentInfo;
use crate::models::user::UserInfo;

/// A job application row with its hiring manager and department joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub applicant_name: String,
    pub manager: Option<DbId>,
    pub manager_info: Json<Vec<UserInfo>>,
    pub department: Option<DbId>,
    pub department_info: Json<Vec<DepartmentInfo>>,
    pub position: String,
    pub task: String,
    pub stage: String,
    pub location: String,
    pub status: String,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobApplication {
    #[validate(length(min = 1, message = "applicant_name is required"))]
    pub applicant_name: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}

/// DTO for updating a job application.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobApplication {
    #[validate(length(min = 1, message = "applicant_name must not be empty"))]
    pub applicant_name: Option<String>,
    pub manager: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub task: Option<String>,
    pub stage: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}
