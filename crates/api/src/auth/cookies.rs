//! The three auth cookies: `access_token`, `refresh_token` and `logged_in`.
//!
//! The two token cookies are `HttpOnly`; `logged_in` is readable by the
//! front-end so it can tell whether a session exists. All three share path
//! `/` and the configured domain.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use crate::config::ServerConfig;
use crate::error::AppError;

pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const LOGGED_IN: &str = "logged_in";

fn build(
    name: &'static str,
    value: String,
    max_age_mins: i64,
    http_only: bool,
    config: &ServerConfig,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .domain(config.cookie_domain.clone())
        .max_age(Duration::minutes(max_age_mins))
        .http_only(http_only)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}

/// `access_token` and `logged_in`, both living as long as the access token.
pub fn access_cookies(token: String, config: &ServerConfig) -> Vec<Cookie<'static>> {
    let mins = config.jwt.access_token_expiry_mins;
    vec![
        build(ACCESS_TOKEN, token, mins, true, config),
        build(LOGGED_IN, "true".to_string(), mins, false, config),
    ]
}

/// `refresh_token`, living as long as the refresh token.
pub fn refresh_cookie(token: String, config: &ServerConfig) -> Cookie<'static> {
    build(
        REFRESH_TOKEN,
        token,
        config.jwt.refresh_token_expiry_mins,
        true,
        config,
    )
}

/// Expired versions of all three cookies.
pub fn removal_cookies(config: &ServerConfig) -> Vec<Cookie<'static>> {
    [(ACCESS_TOKEN, true), (REFRESH_TOKEN, true), (LOGGED_IN, false)]
        .into_iter()
        .map(|(name, http_only)| {
            let mut cookie = build(name, String::new(), 0, http_only, config);
            cookie.make_removal();
            cookie
        })
        .collect()
}

/// Render cookies as `Set-Cookie` headers.
pub fn set_cookie_headers<I>(cookies: I) -> Result<HeaderMap, AppError>
where
    I: IntoIterator<Item = Cookie<'static>>,
{
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        let value = HeaderValue::from_str(&cookie.to_string()).map_err(|e| {
            AppError::InternalError(format!("Unencodable cookie {}: {e}", cookie.name()))
        })?;
        headers.append(SET_COOKIE, value);
    }
    Ok(headers)
}

/// Read a cookie value from the request's `Cookie` headers.
///
/// Unparseable pairs are skipped. Empty values count as absent.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
