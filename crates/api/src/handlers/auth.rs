//! Handlers for the `/auth` resource (Google callback, refresh, logout, current user).

use allnote_core::error::CoreError;
use allnote_db::models::user::{UpsertUser, User};
use allnote_db::repositories::UserRepo;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::cookies::{
    access_cookies, read_cookie, refresh_cookie, removal_cookies, set_cookie_headers,
    REFRESH_TOKEN,
};
use crate::auth::jwt::{generate_access_token, generate_refresh_token, validate_refresh_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query string Google appends to the redirect URI.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    /// Front-end path to return to after sign-in.
    pub state: Option<String>,
}

/// Body of `GET /auth/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/auth/google
///
/// OAuth redirect target. Exchanges the code for a Google profile, upserts
/// the matching user, sets the auth cookies and sends the browser back to
/// the client.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<OAuthCallbackQuery>,
) -> AppResult<(HeaderMap, Redirect)> {
    // 1. The code is mandatory.
    let code = query.code.filter(|c| !c.is_empty()).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Authorization code not provided".into(),
        ))
    })?;

    // 2. Exchange it for the user's profile.
    let profile = state
        .identity
        .fetch_profile(&code)
        .await
        .map_err(|e| AppError::BadGateway(e.to_string()))?;
    if profile.email.is_empty() {
        return Err(AppError::BadGateway(
            "Identity provider returned a profile without an email".into(),
        ));
    }

    // 3. Register or refresh the local user.
    let upsert = UpsertUser {
        email: profile.email,
        google_id: Some(profile.id),
        user_name: profile.name,
        verified: profile.verified_email,
        provider: Some(state.identity.name().to_string()),
        photo: profile.picture,
        position: None,
        department: None,
    };
    let user = UserRepo::upsert(&state.pool, &upsert).await?;

    // 4. Issue tokens.
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Access token generation failed: {e}")))?;
    let refresh_token = generate_refresh_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Refresh token generation failed: {e}")))?;

    let mut cookies = access_cookies(access_token, &state.config);
    cookies.push(refresh_cookie(refresh_token, &state.config));
    let headers = set_cookie_headers(cookies)?;

    let target = format!(
        "{}{}",
        state.config.client_origin,
        return_path(query.state.as_deref())
    );
    tracing::info!(user_id = %user.id, email = %user.email, "User signed in");

    Ok((headers, Redirect::temporary(&target)))
}

/// GET /api/v1/auth/refresh
///
/// Issue a new access token from the `refresh_token` cookie. Any failure is
/// a 403 so the client knows to sign in again.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<(HeaderMap, Json<ApiResponse<RefreshResponse>>)> {
    let forbidden = || AppError::Core(CoreError::Forbidden("Could not refresh access token".into()));

    let token = read_cookie(&headers, REFRESH_TOKEN).ok_or_else(forbidden)?;
    let claims =
        validate_refresh_token(&token, &state.config.jwt).map_err(|_| forbidden())?;

    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "The user belonging to this token no longer exists".into(),
            ))
        })?;

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Access token generation failed: {e}")))?;
    let cookies = set_cookie_headers(access_cookies(access_token.clone(), &state.config))?;

    tracing::debug!(user_id = %user.id, "Access token refreshed");
    Ok((cookies, Json(ApiResponse::ok(RefreshResponse { access_token }))))
}

/// GET /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
) -> AppResult<(HeaderMap, Json<ApiResponse<()>>)> {
    let cookies = set_cookie_headers(removal_cookies(&state.config))?;
    Ok((cookies, Json(ApiResponse::ack())))
}

/// GET /api/v1/auth/users
///
/// The user the access token belongs to.
pub async fn me(auth: AuthUser) -> AppResult<Json<ApiResponse<User>>> {
    Ok(Json(ApiResponse::ok(auth.user)))
}

/// Only same-origin relative paths are honoured; anything else goes home.
fn return_path(state: Option<&str>) -> &str {
    match state {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}
