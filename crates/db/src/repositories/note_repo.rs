//! Repository for the `notes` table.

use allnote_core::ids::{parse_ref, parse_ref_patch};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for queries over `notes t`.
const COLUMNS: &str = concat!(
    "t.id, t.author_id AS author, ",
    user_info!("t.author_id"),
    " AS author_info, t.text, t.created_at, t.updated_at"
);

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning it with its author joined in.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, RepoError> {
        let author = parse_ref("User", &input.author)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO notes (id, author_id, text, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $4)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(new_id())
            .bind(author)
            .bind(&input.text)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(note)
    }

    /// Find a note by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes t WHERE t.id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes t ORDER BY t.created_at DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// List the notes written by one user.
    pub async fn list_by_author(pool: &PgPool, user_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes t WHERE t.author_id = $1 ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, RepoError> {
        let author = parse_ref_patch("User", input.author.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE notes SET
                    author_id = CASE WHEN $2 THEN $3 ELSE author_id END,
                    text = COALESCE($4, text),
                    updated_at = GREATEST($5, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(author.is_present())
            .bind(author.value())
            .bind(&input.text)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(note)
    }

    /// Delete a note by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
