//! Meeting entity model and DTOs.
//!
//! Participants are stored as an ordered id array. The repository resolves
//! them in a second query and assembles [`Meeting`] from [`MeetingRow`].

use allnote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::UserInfo;

/// A meeting as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub participants: Vec<Participant>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub location: String,
    pub created_by: Option<DbId>,
    pub created_by_info: Json<Vec<UserInfo>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One slot of a meeting's participant list.
///
/// `participant_info` is empty when the user no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub participant: DbId,
    pub participant_info: Vec<UserInfo>,
}

/// Raw `meetings` row before participants are resolved.
#[derive(Debug, Clone, FromRow)]
pub struct MeetingRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub participants: Vec<DbId>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub location: String,
    pub created_by: Option<DbId>,
    pub created_by_info: Json<Vec<UserInfo>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MeetingRow {
    /// Attach resolved participant slots.
    pub fn into_meeting(self, participants: Vec<Participant>) -> Meeting {
        Meeting {
            id: self.id,
            title: self.title,
            description: self.description,
            participants,
            start_dt: self.start_dt,
            end_dt: self.end_dt,
            location: self.location,
            created_by: self.created_by,
            created_by_info: self.created_by_info,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// DTO for creating a meeting. Participants are user ids in display order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeeting {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub created_by: String,
}

/// DTO for updating a meeting. A present `participants` list replaces the
/// stored one, even when empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMeeting {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub participants: Option<Vec<String>>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub location: Option<String>,
    pub created_by: Option<String>,
}
