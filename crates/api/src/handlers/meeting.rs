//! Handlers for the `/meetings` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::meeting::{CreateMeeting, Meeting, UpdateMeeting};
use allnote_db::repositories::MeetingRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Meeting";

/// GET /api/v1/meetings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Meeting>>>> {
    let items = MeetingRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/meetings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Meeting>>> {
    let id = parse_id(ENTITY, &id)?;
    let meeting = MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(meeting)))
}

/// GET /api/v1/meetings/user/{id}
///
/// Meetings created by the user, not the ones they attend.
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Meeting>>>> {
    let user_id = parse_id("User", &id)?;
    let items = MeetingRepo::list_by_creator(&state.pool, user_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/v1/meetings
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMeeting>,
) -> AppResult<Json<ApiResponse<()>>> {
    let meeting = MeetingRepo::create(&state.pool, &input).await?;
    tracing::info!(meeting_id = %meeting.id, "Meeting created");
    Ok(Json(ApiResponse::ack()))
}

/// PATCH /api/v1/meetings/{id}
///
/// A `participants` array in the body replaces the whole list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateMeeting>,
) -> AppResult<Json<ApiResponse<Meeting>>> {
    let id = parse_id(ENTITY, &id)?;
    let meeting = MeetingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(meeting)))
}

/// DELETE /api/v1/meetings/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if MeetingRepo::delete(&state.pool, id).await? {
        tracing::info!(meeting_id = %id, "Meeting deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
