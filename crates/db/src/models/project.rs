//! Project entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Project fields embedded in todos and project tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: DbId,
    pub name: String,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}

/// DTO for updating a project. Dates can be set but not cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
}
