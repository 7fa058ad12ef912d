//! Handlers for the `/jobApplications` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::job_application::{CreateJobApplication, JobApplication, UpdateJobApplication};
use allnote_db::repositories::JobApplicationRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "JobApplication";

/// GET /api/v1/jobApplications
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<JobApplication>>>> {
    let items = JobApplicationRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/jobApplications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<JobApplication>>> {
    let id = parse_id(ENTITY, &id)?;
    let job_application = JobApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(job_application)))
}

/// GET /api/v1/jobApplications/manager/{id}
pub async fn list_by_manager(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<JobApplication>>>> {
    let manager_id = parse_id("User", &id)?;
    let items = JobApplicationRepo::list_by_manager(&state.pool, manager_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/v1/jobApplications
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateJobApplication>,
) -> AppResult<Json<ApiResponse<()>>> {
    let job_application = JobApplicationRepo::create(&state.pool, &input).await?;
    tracing::info!(job_application_id = %job_application.id, "JobApplication created");
    Ok(Json(ApiResponse::ack()))
}

/// PATCH /api/v1/jobApplications/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateJobApplication>,
) -> AppResult<Json<ApiResponse<JobApplication>>> {
    let id = parse_id(ENTITY, &id)?;
    let job_application = JobApplicationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(job_application)))
}

/// DELETE /api/v1/jobApplications/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if JobApplicationRepo::delete(&state.pool, id).await? {
        tracing::info!(job_application_id = %id, "JobApplication deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
