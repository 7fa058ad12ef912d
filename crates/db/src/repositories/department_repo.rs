//! Repository for the `departments` table.

use allnote_core::ids::{parse_ref, parse_ref_patch};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::department::{CreateDepartment, Department, UpdateDepartment};

/// Column list for queries over `departments t`.
const COLUMNS: &str = concat!(
    "t.id, t.name, t.parent_id AS parent, ",
    department_info!("t.parent_id"),
    " AS parent_info, t.created_at, t.updated_at"
);

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning it with its parent joined in.
    pub async fn create(pool: &PgPool, input: &CreateDepartment) -> Result<Department, RepoError> {
        let parent = parse_ref("Department", &input.parent)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO departments (id, name, parent_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $4)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let department = sqlx::query_as::<_, Department>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(parent)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(department)
    }

    /// Find a department by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments t WHERE t.id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all departments, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments t ORDER BY t.created_at DESC");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// List the direct children of a department.
    pub async fn list_by_parent(
        pool: &PgPool,
        parent_id: DbId,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments t WHERE t.parent_id = $1 ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
    ) -> Result<Option<Department>, RepoError> {
        let parent = parse_ref_patch("Department", input.parent.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE departments SET
                    name = COALESCE($2, name),
                    parent_id = CASE WHEN $3 THEN $4 ELSE parent_id END,
                    updated_at = GREATEST($5, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let department = sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(parent.is_present())
            .bind(parent.value())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(department)
    }

    /// Delete a department by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
