//! Note entity model and DTOs.

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::UserInfo;

/// A note row with its author joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub author: Option<DbId>,
    pub author_info: Json<Vec<UserInfo>>,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note. An empty `author` leaves the note unowned.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[serde(default)]
    pub author: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

/// DTO for updating a note.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNote {
    pub author: Option<String>,
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: Option<String>,
}
