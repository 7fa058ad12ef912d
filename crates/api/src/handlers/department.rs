//! Handlers for the `/departments` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::department::{CreateDepartment, Department, UpdateDepartment};
use allnote_db::repositories::DepartmentRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Department";

/// GET /api/v1/departments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    let items = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Department>>> {
    let id = parse_id(ENTITY, &id)?;
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(department)))
}

/// GET /api/v1/departments/parent/{id}
pub async fn list_by_parent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    let parent_id = parse_id("Department", &id)?;
    let items = DepartmentRepo::list_by_parent(&state.pool, parent_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/v1/departments
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateDepartment>,
) -> AppResult<Json<ApiResponse<()>>> {
    let department = DepartmentRepo::create(&state.pool, &input).await?;
    tracing::info!(department_id = %department.id, "Department created");
    Ok(Json(ApiResponse::ack()))
}

/// PATCH /api/v1/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateDepartment>,
) -> AppResult<Json<ApiResponse<Department>>> {
    let id = parse_id(ENTITY, &id)?;
    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(department)))
}

/// DELETE /api/v1/departments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if DepartmentRepo::delete(&state.pool, id).await? {
        tracing::info!(department_id = %id, "Department deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
