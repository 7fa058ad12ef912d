//! Repository for the `job_applications` table.

use allnote_core::ids::{parse_ref, parse_ref_patch};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::job_application::{
    CreateJobApplication, JobApplication, UpdateJobApplication,
};

/// Column list for queries over `job_applications t`.
const COLUMNS: &str = concat!(
    "t.id, t.applicant_name, ",
    "t.manager_id AS manager, ",
    user_info!("t.manager_id"),
    " AS manager_info, ",
    "t.department_id AS department, ",
    department_info!("t.department_id"),
    " AS department_info, ",
    "t.position, t.task, t.stage, t.location, t.status, ",
    "t.start_dt, t.end_dt, t.created_at, t.updated_at"
);

/// Provides CRUD operations for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Insert a new application, returning it with its references joined in.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobApplication,
    ) -> Result<JobApplication, RepoError> {
        let manager = parse_ref("User", &input.manager)?;
        let department = parse_ref("Department", &input.department)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO job_applications
                    (id, applicant_name, manager_id, department_id, position, task, stage,
                     location, status, start_dt, end_dt, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let application = sqlx::query_as::<_, JobApplication>(&query)
            .bind(new_id())
            .bind(&input.applicant_name)
            .bind(manager)
            .bind(department)
            .bind(&input.position)
            .bind(&input.task)
            .bind(&input.stage)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.start_dt)
            .bind(input.end_dt)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(application)
    }

    /// Find an application by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_applications t WHERE t.id = $1");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all applications, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM job_applications t ORDER BY t.created_at DESC");
        sqlx::query_as::<_, JobApplication>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the applications handled by one hiring manager.
    pub async fn list_by_manager(
        pool: &PgPool,
        manager_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications t WHERE t.manager_id = $1 \
             ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobApplication,
    ) -> Result<Option<JobApplication>, RepoError> {
        let manager = parse_ref_patch("User", input.manager.as_deref())?;
        let department = parse_ref_patch("Department", input.department.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE job_applications SET
                    applicant_name = COALESCE($2, applicant_name),
                    manager_id = CASE WHEN $3 THEN $4 ELSE manager_id END,
                    department_id = CASE WHEN $5 THEN $6 ELSE department_id END,
                    position = COALESCE($7, position),
                    task = COALESCE($8, task),
                    stage = COALESCE($9, stage),
                    location = COALESCE($10, location),
                    status = COALESCE($11, status),
                    start_dt = COALESCE($12, start_dt),
                    end_dt = COALESCE($13, end_dt),
                    updated_at = GREATEST($14, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let application = sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(&input.applicant_name)
            .bind(manager.is_present())
            .bind(manager.value())
            .bind(department.is_present())
            .bind(department.value())
            .bind(&input.position)
            .bind(&input.task)
            .bind(&input.stage)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.start_dt)
            .bind(input.end_dt)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(application)
    }

    /// Delete an application by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
