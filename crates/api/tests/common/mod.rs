#![allow(dead_code)]

use std::sync::Arc;

use allnote_api::auth::google::{
    GoogleOAuthConfig, IdentityProvider, ProviderError, ProviderProfile,
};
use allnote_api::auth::jwt::{generate_access_token, generate_refresh_token, JwtConfig};
use allnote_api::config::ServerConfig;
use allnote_api::router::build_app_router;
use allnote_api::state::AppState;
use allnote_core::types::DbId;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Authorization code the stub provider accepts.
pub const GOOD_CODE: &str = "good-code";

/// Identity provider that never leaves the process.
///
/// [`GOOD_CODE`] yields a fixed profile; any other code fails as if Google
/// had rejected it.
pub struct StubProvider;

#[async_trait]
impl IdentityProvider for StubProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn fetch_profile(&self, code: &str) -> Result<ProviderProfile, ProviderError> {
        if code != GOOD_CODE {
            return Err(ProviderError::Exchange("invalid_grant".into()));
        }
        Ok(ProviderProfile {
            id: "google-123".to_string(),
            email: "oauth@example.com".to_string(),
            verified_email: Some(true),
            name: Some("OAuth User".to_string()),
            picture: Some("https://example.com/avatar.png".to_string()),
        })
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 10,
        client_origin: "http://localhost:3000".to_string(),
        cookie_domain: "localhost".to_string(),
        cookie_secure: false,
        jwt: JwtConfig {
            access_secret: "test-access-secret".to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_mins: 60,
        },
        google: GoogleOAuthConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            redirect_url: "http://localhost:8080/api/v1/auth/google".to_string(),
        },
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        identity: Arc::new(StubProvider),
    };
    build_app_router(state, &config)
}

pub fn access_token(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).unwrap()
}

pub fn refresh_token(user_id: DbId) -> String {
    generate_refresh_token(user_id, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a record, then read it back as the newest entry of the collection.
///
/// Create endpoints only acknowledge, so this is how tests learn the id.
pub async fn create_and_fetch(
    pool: &PgPool,
    collection: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let uri = format!("/api/v1/{collection}");
    let response = post_json(build_test_app(pool.clone()), &uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let list = body_json(get(build_test_app(pool.clone()), &uri).await).await;
    list["data"][0].clone()
}
