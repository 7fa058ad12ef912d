//! Handlers for the `/notes` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::note::{CreateNote, Note, UpdateNote};
use allnote_db::repositories::NoteRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Note";

/// GET /api/v1/notes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Note>>>> {
    let items = NoteRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Note>>> {
    let id = parse_id(ENTITY, &id)?;
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(note)))
}

/// GET /api/v1/notes/user/{id} -- notes authored by the user.
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Note>>>> {
    let user_id = parse_id("User", &id)?;
    let items = NoteRepo::list_by_author(&state.pool, user_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateNote>,
) -> AppResult<Json<ApiResponse<()>>> {
    let note = NoteRepo::create(&state.pool, &input).await?;
    tracing::info!(note_id = %note.id, "Note created");
    Ok(Json(ApiResponse::ack()))
}

/// PATCH /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateNote>,
) -> AppResult<Json<ApiResponse<Note>>> {
    let id = parse_id(ENTITY, &id)?;
    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(note)))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if NoteRepo::delete(&state.pool, id).await? {
        tracing::info!(note_id = %id, "Note deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
