//! Handlers for the `/project-tasks` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::project_task::{CreateProjectTask, ProjectTask, UpdateProjectTask};
use allnote_db::repositories::ProjectTaskRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "ProjectTask";

/// GET /api/v1/project-tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<ProjectTask>>>> {
    let items = ProjectTaskRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/project-tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ProjectTask>>> {
    let id = parse_id(ENTITY, &id)?;
    let project_task = ProjectTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(project_task)))
}

/// GET /api/v1/project-tasks/project/{id}
///
/// Works for deleted projects too; their tasks are not removed with them.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<ProjectTask>>>> {
    let project_id = parse_id("Project", &id)?;
    let items = ProjectTaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/v1/project-tasks
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProjectTask>,
) -> AppResult<Json<ApiResponse<()>>> {
    let project_task = ProjectTaskRepo::create(&state.pool, &input).await?;
    tracing::info!(project_task_id = %project_task.id, "ProjectTask created");
    Ok(Json(ApiResponse::ack()))
}

/// PATCH /api/v1/project-tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateProjectTask>,
) -> AppResult<Json<ApiResponse<ProjectTask>>> {
    let id = parse_id(ENTITY, &id)?;
    let project_task = ProjectTaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(project_task)))
}

/// DELETE /api/v1/project-tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if ProjectTaskRepo::delete(&state.pool, id).await? {
        tracing::info!(project_task_id = %id, "ProjectTask deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
