//! HTTP-level integration tests for the `/auth` endpoints.
//!
//! The Google exchange is replaced by `common::StubProvider`.

mod common;

use allnote_db::models::user::{CreateUser, User};
use allnote_db::repositories::UserRepo;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::StatusCode;
use axum::response::Response;
use common::{body_json, get, get_auth, get_with_cookie, GOOD_CODE};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_test_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        user_name: "Tester".to_string(),
        ..Default::default()
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

fn find_cookie<'a>(cookies: &'a [String], name: &str) -> Option<&'a String> {
    cookies
        .iter()
        .find(|c| c.starts_with(&format!("{name}=")))
}

// ---------------------------------------------------------------------------
// OAuth callback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_callback_without_code_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/google?state=/notes").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["err"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_callback_with_rejected_code_returns_502(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/auth/google?code=expired").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["err"], "BAD_GATEWAY");
    assert!(UserRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_callback_signs_in_and_redirects(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/auth/google?code={GOOD_CODE}&state=/notes"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(LOCATION).unwrap(),
        "http://localhost:3000/notes"
    );

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 3);
    let access = find_cookie(&cookies, "access_token").expect("access_token cookie");
    assert!(access.contains("HttpOnly"));
    assert!(access.contains("Path=/"));
    assert!(access.contains("Domain=localhost"));
    assert!(find_cookie(&cookies, "refresh_token").unwrap().contains("HttpOnly"));
    assert!(!find_cookie(&cookies, "logged_in").unwrap().contains("HttpOnly"));

    let user = UserRepo::find_by_email(&pool, "oauth@example.com")
        .await
        .unwrap()
        .expect("user should be upserted");
    assert_eq!(user.provider, "google");
    assert_eq!(user.google_id, "google-123");
    assert_eq!(user.user_name, "OAuth User");
    assert_eq!(user.verified, Some(true));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_repeated_sign_in_reuses_user(pool: PgPool) {
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/auth/google?code={GOOD_CODE}")).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_callback_ignores_absolute_state(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/auth/google?code={GOOD_CODE}&state=https://evil.example"),
    )
    .await;

    assert_eq!(
        response.headers().get(LOCATION).unwrap(),
        "http://localhost:3000/"
    );
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_invalid_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/users", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_bearer_token(pool: PgPool) {
    let user = create_test_user(&pool, "me@example.com").await;
    let token = common::access_token(user.id);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "me@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_cookie_token(pool: PgPool) {
    let user = create_test_user(&pool, "cookie@example.com").await;
    let cookie = format!("logged_in=true; access_token={}", common::access_token(user.id));

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/api/v1/auth/users", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_for_deleted_user_returns_403(pool: PgPool) {
    let user = create_test_user(&pool, "gone@example.com").await;
    let token = common::access_token(user.id);
    UserRepo::delete(&pool, user.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_issues_new_access_token(pool: PgPool) {
    let user = create_test_user(&pool, "refresh@example.com").await;
    let cookie = format!("refresh_token={}", common::refresh_token(user.id));

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/api/v1/auth/refresh", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookies(&response);
    assert!(find_cookie(&cookies, "access_token").is_some());
    assert!(find_cookie(&cookies, "logged_in").is_some());
    assert!(find_cookie(&cookies, "refresh_token").is_none());

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].as_str().unwrap().len() > 20);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_without_cookie_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/refresh").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rejects_access_token(pool: PgPool) {
    let user = create_test_user(&pool, "swap@example.com").await;
    let cookie = format!("refresh_token={}", common::access_token(user.id));

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/api/v1/auth/refresh", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_for_deleted_user_returns_403(pool: PgPool) {
    let user = create_test_user(&pool, "ghost@example.com").await;
    let cookie = format!("refresh_token={}", common::refresh_token(user.id));
    UserRepo::delete(&pool, user.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/api/v1/auth/refresh", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_expires_cookies(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/logout").await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 3);
    for cookie in &cookies {
        assert!(cookie.contains("Max-Age=0"), "cookie not expired: {cookie}");
    }
    assert!(body_json(response).await.get("data").is_none());
}
