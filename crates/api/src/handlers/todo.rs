//! Handlers for the `/todos` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use allnote_db::repositories::TodoRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Todo";

/// GET /api/v1/todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Todo>>>> {
    let items = TodoRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Todo>>> {
    let id = parse_id(ENTITY, &id)?;
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(todo)))
}

/// GET /api/v1/todos/user/{id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Todo>>>> {
    let user_id = parse_id("User", &id)?;
    let items = TodoRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/v1/todos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTodo>,
) -> AppResult<Json<ApiResponse<()>>> {
    let todo = TodoRepo::create(&state.pool, &input).await?;
    tracing::info!(todo_id = %todo.id, "Todo created");
    Ok(Json(ApiResponse::ack()))
}

/// PATCH /api/v1/todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateTodo>,
) -> AppResult<Json<ApiResponse<Todo>>> {
    let id = parse_id(ENTITY, &id)?;
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(todo)))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if TodoRepo::delete(&state.pool, id).await? {
        tracing::info!(todo_id = %id, "Todo deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
