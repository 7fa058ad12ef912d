//! Repository for the `todos` table.

use allnote_core::ids::{parse_ref, parse_ref_patch};
use allnote_core::types::{new_id, DbId};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list for queries over `todos t`.
const COLUMNS: &str = concat!(
    "t.id, t.task, t.status, ",
    "t.project_id AS project, ",
    project_info!("t.project_id"),
    " AS project_info, ",
    "t.user_id AS \"user\", ",
    user_info!("t.user_id"),
    " AS user_info, ",
    "t.department_id AS department, ",
    department_info!("t.department_id"),
    " AS department_info, ",
    "t.start_dt, t.end_dt, t.created_at, t.updated_at"
);

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning it with its references joined in.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, RepoError> {
        let project = parse_ref("Project", &input.project)?;
        let user = parse_ref("User", &input.user)?;
        let department = parse_ref("Department", &input.department)?;

        let query = format!(
            "WITH t AS (
                INSERT INTO todos
                    (id, task, status, project_id, user_id, department_id, start_dt, end_dt,
                     created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(new_id())
            .bind(&input.task)
            .bind(&input.status)
            .bind(project)
            .bind(user)
            .bind(department)
            .bind(input.start_dt)
            .bind(input.end_dt)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(todo)
    }

    /// Find a todo by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos t WHERE t.id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos t ORDER BY t.created_at DESC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// List the todos assigned to one user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos t WHERE t.user_id = $1 ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, RepoError> {
        let project = parse_ref_patch("Project", input.project.as_deref())?;
        let user = parse_ref_patch("User", input.user.as_deref())?;
        let department = parse_ref_patch("Department", input.department.as_deref())?;

        let query = format!(
            "WITH t AS (
                UPDATE todos SET
                    task = COALESCE($2, task),
                    status = COALESCE($3, status),
                    project_id = CASE WHEN $4 THEN $5 ELSE project_id END,
                    user_id = CASE WHEN $6 THEN $7 ELSE user_id END,
                    department_id = CASE WHEN $8 THEN $9 ELSE department_id END,
                    start_dt = COALESCE($10, start_dt),
                    end_dt = COALESCE($11, end_dt),
                    updated_at = GREATEST($12, updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.task)
            .bind(&input.status)
            .bind(project.is_present())
            .bind(project.value())
            .bind(user.is_present())
            .bind(user.value())
            .bind(department.is_present())
            .bind(department.value())
            .bind(input.start_dt)
            .bind(input.end_dt)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(todo)
    }

    /// Delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
