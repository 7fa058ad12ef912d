//! Handlers for the `/projects` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::project::{CreateProject, Project, UpdateProject};
use allnote_db::repositories::ProjectRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<Json<ApiResponse<()>>> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, name = %project.name, "Project created");
    Ok(Json(ApiResponse::ack()))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let id = parse_id(ENTITY, &id)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PATCH /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let id = parse_id(ENTITY, &id)?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(project)))
}

/// DELETE /api/v1/projects/{id}
///
/// Tasks and todos referencing the project are left in place.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = %id, "Project deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
