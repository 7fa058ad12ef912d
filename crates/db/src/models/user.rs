//! User entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::department::DepartmentInfo;

/// A user row with its department joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub google_id: String,
    pub email: String,
    pub user_name: String,
    pub verified: Option<bool>,
    pub provider: String,
    pub photo: String,
    pub position: String,
    pub department: Option<DbId>,
    pub department_info: Json<Vec<DepartmentInfo>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User fields embedded in notes, todos, meetings and the like.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub user_name: String,
    pub position: String,
    pub photo: String,
}

/// DTO for registering a user directly.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    pub google_id: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub user_name: String,
    pub verified: Option<bool>,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
}

/// DTO for patching a user by id. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    pub google_id: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub user_name: Option<String>,
    pub verified: Option<bool>,
    pub provider: Option<String>,
    pub photo: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}

/// DTO for login-or-register: matched on `email`, other fields merged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertUser {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub google_id: Option<String>,
    pub user_name: Option<String>,
    pub verified: Option<bool>,
    pub provider: Option<String>,
    pub photo: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}
