//! Handlers for the `/users` resource.

use allnote_core::error::CoreError;
use allnote_core::ids::parse_id;
use allnote_db::models::user::{CreateUser, UpdateUser, UpsertUser, User};
use allnote_db::repositories::UserRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "User";

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let id = parse_id(ENTITY, &id)?;
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/v1/users/department/{id}
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let department_id = parse_id("Department", &id)?;
    let users = UserRepo::list_by_department(&state.pool, department_id).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/v1/users
///
/// A duplicate email is rejected with 409.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateUser>,
) -> AppResult<Json<ApiResponse<()>>> {
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %user.id, email = %user.email, "User created");
    Ok(Json(ApiResponse::ack()))
}

/// PUT /api/v1/users
///
/// Insert or merge by email. Returns the resulting user.
pub async fn upsert(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<UpsertUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = UserRepo::upsert(&state.pool, &input).await?;
    tracing::info!(user_id = %user.id, email = %user.email, "User upserted");
    Ok(Json(ApiResponse::ok(user)))
}

/// PATCH /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    let id = parse_id(ENTITY, &id)?;
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(ENTITY, &id)?;
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = %id, "User deleted");
        Ok(Json(ApiResponse::ack()))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
