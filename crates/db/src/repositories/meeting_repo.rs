//! Repository for the `meetings` table.
//!
//! Meeting rows are read first; the users referenced by their participant
//! lists are then loaded in one batch and projected back in list order.

use std::collections::HashMap;

use allnote_core::ids::{parse_ref, parse_ref_patch, parse_refs};
use allnote_core::relation::{attach_many, distinct_keys};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::meeting::{CreateMeeting, Meeting, MeetingRow, Participant, UpdateMeeting};
use crate::repositories::UserRepo;

/// Column list for queries over `meetings t`.
const COLUMNS: &str = concat!(
    "t.id, t.title, t.description, t.participants, t.start_dt, t.end_dt, t.location, ",
    "t.created_by_id AS created_by, ",
    user_info!("t.created_by_id"),
    " AS created_by_info, t.created_at, t.updated_at"
);

/// Provides CRUD operations for meetings.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Insert a new meeting. Every participant id must be well-formed.
    pub async fn create(pool: &PgPool, input: &CreateMeeting) -> Result<Meeting, RepoError> {
        let participants = parse_refs("User", &input.participants)?;
        let created_by = parse_ref("User", &input.created_by)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO meetings
                    (id, title, description, participants, start_dt, end_dt, location,
                     created_by_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let row = sqlx::query_as::<_, MeetingRow>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&participants)
            .bind(input.start_dt)
            .bind(input.end_dt)
            .bind(&input.location)
            .bind(created_by)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;

        let meeting = Self::resolve(pool, vec![row])
            .await?
            .pop()
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(meeting)
    }

    /// Find a meeting by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings t WHERE t.id = $1");
        let row = sqlx::query_as::<_, MeetingRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match row {
            Some(row) => Ok(Self::resolve(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List all meetings, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings t ORDER BY t.created_at DESC");
        let rows = sqlx::query_as::<_, MeetingRow>(&query)
            .fetch_all(pool)
            .await?;
        Self::resolve(pool, rows).await
    }

    /// List the meetings organised by one user.
    pub async fn list_by_creator(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Meeting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meetings t WHERE t.created_by_id = $1 \
             ORDER BY t.created_at DESC"
        );
        let rows = sqlx::query_as::<_, MeetingRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Self::resolve(pool, rows).await
    }

    /// Apply a sparse update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeeting,
    ) -> Result<Option<Meeting>, RepoError> {
        let participants = input
            .participants
            .as_deref()
            .map(|raw| parse_refs("User", raw))
            .transpose()?;
        let created_by = parse_ref_patch("User", input.created_by.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE meetings SET
                    title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    participants = COALESCE($4, participants),
                    start_dt = COALESCE($5, start_dt),
                    end_dt = COALESCE($6, end_dt),
                    location = COALESCE($7, location),
                    created_by_id = CASE WHEN $8 THEN $9 ELSE created_by_id END,
                    updated_at = GREATEST($10, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let row = sqlx::query_as::<_, MeetingRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(participants)
            .bind(input.start_dt)
            .bind(input.end_dt)
            .bind(&input.location)
            .bind(created_by.is_present())
            .bind(created_by.value())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;

        match row {
            Some(row) => Ok(Self::resolve(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Delete a meeting by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve the participant lists of a batch of rows with one user query.
    async fn resolve(pool: &PgPool, rows: Vec<MeetingRow>) -> Result<Vec<Meeting>, sqlx::Error> {
        let ids = distinct_keys(rows.iter().flat_map(|row| row.participants.iter().copied()));
        let users: HashMap<DbId, _> = UserRepo::find_info_by_ids(pool, &ids)
            .await?
            .into_iter()
            .map(|info| (info.id, info))
            .collect();

        tracing::debug!(
            meetings = rows.len(),
            participants = ids.len(),
            resolved = users.len(),
            "Resolved meeting participants"
        );

        Ok(rows
            .into_iter()
            .map(|row| {
                let participants = attach_many(&row.participants, &users)
                    .into_iter()
                    .map(|(participant, participant_info)| Participant {
                        participant,
                        participant_info,
                    })
                    .collect();
                row.into_meeting(participants)
            })
            .collect())
    }
}
