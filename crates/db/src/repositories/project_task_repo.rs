//! Repository for the `project_tasks` table.

use allnote_core::ids::{parse_id, parse_ref, parse_ref_patch};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::project_task::{CreateProjectTask, ProjectTask, UpdateProjectTask};

/// Column list for queries over `project_tasks t`.
const COLUMNS: &str = concat!(
    "t.id, ",
    "t.project_id AS project, ",
    project_info!("t.project_id"),
    " AS project_info, ",
    "t.manager_id AS manager, ",
    user_info!("t.manager_id"),
    " AS manager_info, ",
    "t.department_id AS department, ",
    department_info!("t.department_id"),
    " AS department_info, ",
    "t.task_description, t.status, t.created_at, t.updated_at"
);

/// Provides CRUD operations for project tasks.
pub struct ProjectTaskRepo;

impl ProjectTaskRepo {
    /// Insert a new task. The project reference must be a well-formed id; it
    /// is not checked for existence.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectTask,
    ) -> Result<ProjectTask, RepoError> {
        let project = parse_id("Project", &input.project)?;
        let manager = parse_ref("User", &input.manager)?;
        let department = parse_ref("Department", &input.department)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO project_tasks
                    (id, project_id, manager_id, department_id, task_description, status,
                     created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let task = sqlx::query_as::<_, ProjectTask>(&query)
            .bind(new_id())
            .bind(project)
            .bind(manager)
            .bind(department)
            .bind(&input.task_description)
            .bind(&input.status)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(task)
    }

    /// Find a task by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_tasks t WHERE t.id = $1");
        sqlx::query_as::<_, ProjectTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_tasks t ORDER BY t.created_at DESC");
        sqlx::query_as::<_, ProjectTask>(&query).fetch_all(pool).await
    }

    /// List the tasks belonging to a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_tasks t WHERE t.project_id = $1 \
             ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, ProjectTask>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse update. The project reference is never changed.
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectTask,
    ) -> Result<Option<ProjectTask>, RepoError> {
        let manager = parse_ref_patch("User", input.manager.as_deref())?;
        let department = parse_ref_patch("Department", input.department.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE project_tasks SET
                    manager_id = CASE WHEN $2 THEN $3 ELSE manager_id END,
                    department_id = CASE WHEN $4 THEN $5 ELSE department_id END,
                    task_description = COALESCE($6, task_description),
                    status = COALESCE($7, status),
                    updated_at = GREATEST($8, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let task = sqlx::query_as::<_, ProjectTask>(&query)
            .bind(id)
            .bind(manager.is_present())
            .bind(manager.value())
            .bind(department.is_present())
            .bind(department.value())
            .bind(&input.task_description)
            .bind(&input.status)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(task)
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
