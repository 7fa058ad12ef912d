//! `GET /health`, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub version: &'static str,
    /// Newest applied migration, `None` on an unmigrated database.
    pub schema_version: Option<i64>,
}

/// Reports the build version and the database schema version. An unreachable
/// database is a 503.
async fn health(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Health>>> {
    let schema_version = allnote_db::schema_version(&state.pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(ApiResponse::ok(Health {
        version: env!("CARGO_PKG_VERSION"),
        schema_version,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
