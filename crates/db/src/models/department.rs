//! Department entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A department row with its parent joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub parent: Option<DbId>,
    pub parent_info: Json<Vec<DepartmentInfo>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Department fields embedded in other records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub id: DbId,
    pub name: String,
    pub parent: Option<DbId>,
}

/// DTO for creating a department. An empty `parent` leaves it unset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDepartment {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub parent: String,
}

/// DTO for updating a department. `parent: ""` detaches it from its parent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDepartment {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub parent: Option<String>,
}
