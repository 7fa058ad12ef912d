//! Repository for the `users` table.

use allnote_core::ids::{parse_ref, parse_ref_patch};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::user::{CreateUser, UpdateUser, UpsertUser, User, UserInfo};

const EMAIL_CONSTRAINT: &str = "uq_users_email";
const EMAIL_TAKEN: &str = "A user with this email already exists";

/// Column list for queries over `users t`.
const COLUMNS: &str = concat!(
    "t.id, t.google_id, t.email, t.user_name, t.verified, t.provider, ",
    "t.photo, t.position, t.department_id AS department, ",
    department_info!("t.department_id"),
    " AS department_info, t.created_at, t.updated_at"
);

/// Provides CRUD and login upsert operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user.
    ///
    /// Fails with [`CoreError::Conflict`] if the email is taken.
    ///
    /// [`CoreError::Conflict`]: allnote_core::error::CoreError::Conflict
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, RepoError> {
        let department = parse_ref("Department", &input.department)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO users
                    (id, google_id, email, user_name, verified, provider, photo, position,
                     department_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(new_id())
            .bind(&input.google_id)
            .bind(&input.email)
            .bind(&input.user_name)
            .bind(input.verified)
            .bind(&input.provider)
            .bind(&input.photo)
            .bind(&input.position)
            .bind(department)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
            .map_err(|e| RepoError::unique_violation(e, EMAIL_CONSTRAINT, EMAIL_TAKEN))?;
        Ok(user)
    }

    /// Insert a user keyed by email, or merge the supplied fields into the
    /// existing row. A single statement, so concurrent upserts of the same
    /// email converge on one row.
    pub async fn upsert(pool: &PgPool, input: &UpsertUser) -> Result<User, RepoError> {
        let department = parse_ref_patch("Department", input.department.as_deref())?;

        let query = format!(
            "WITH t AS (
                INSERT INTO users
                    (id, email, google_id, user_name, verified, provider, photo, position,
                     department_id, created_at, updated_at)
                VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), $5, COALESCE($6, ''),
                        COALESCE($7, ''), COALESCE($8, ''), $10, $11, $11)
                ON CONFLICT (email) DO UPDATE SET
                    google_id = COALESCE($3, users.google_id),
                    user_name = COALESCE($4, users.user_name),
                    verified = COALESCE($5, users.verified),
                    provider = COALESCE($6, users.provider),
                    photo = COALESCE($7, users.photo),
                    position = COALESCE($8, users.position),
                    department_id = CASE WHEN $9 THEN $10 ELSE users.department_id END,
                    updated_at = GREATEST($11, users.updated_at + INTERVAL '1 microsecond')
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(new_id())
            .bind(&input.email)
            .bind(&input.google_id)
            .bind(&input.user_name)
            .bind(input.verified)
            .bind(&input.provider)
            .bind(&input.photo)
            .bind(&input.position)
            .bind(department.is_present())
            .bind(department.value())
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users t WHERE t.id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users t WHERE t.email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users t ORDER BY t.created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// List the members of a department.
    pub async fn list_by_department(
        pool: &PgPool,
        department_id: DbId,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users t WHERE t.department_id = $1 ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(department_id)
            .fetch_all(pool)
            .await
    }

    /// Batch-load the compact projection of several users.
    ///
    /// Ids with no matching row are simply absent from the result.
    pub async fn find_info_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<UserInfo>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, UserInfo>(
            "SELECT id, email, user_name, position, photo FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Apply a sparse update. Returns `None` if no row with `id` exists.
    /// Moving to an email another user holds is a conflict.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, RepoError> {
        let department = parse_ref_patch("Department", input.department.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE users SET
                    google_id = COALESCE($2, google_id),
                    email = COALESCE($3, email),
                    user_name = COALESCE($4, user_name),
                    verified = COALESCE($5, verified),
                    provider = COALESCE($6, provider),
                    photo = COALESCE($7, photo),
                    position = COALESCE($8, position),
                    department_id = CASE WHEN $9 THEN $10 ELSE department_id END,
                    updated_at = GREATEST($11, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.google_id)
            .bind(&input.email)
            .bind(&input.user_name)
            .bind(input.verified)
            .bind(&input.provider)
            .bind(&input.photo)
            .bind(&input.position)
            .bind(department.is_present())
            .bind(department.value())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
            .map_err(|e| RepoError::unique_violation(e, EMAIL_CONSTRAINT, EMAIL_TAKEN))?;
        Ok(user)
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
