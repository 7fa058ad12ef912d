use crate::auth::google::GoogleOAuthConfig;
use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Deadline for a whole request in seconds (default: `10`).
    pub request_timeout_secs: u64,
    /// Front-end origin the OAuth callback redirects back to.
    pub client_origin: String,
    /// Domain attribute of the auth cookies (default: `localhost`).
    pub cookie_domain: String,
    /// Whether auth cookies carry the `Secure` attribute (default: `false`).
    pub cookie_secure: bool,
    /// JWT token configuration (secrets, expiry durations).
    pub jwt: JwtConfig,
    /// Google OAuth client credentials.
    pub google: GoogleOAuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `10`                       |
    /// | `CLIENT_ORIGIN`        | `http://localhost:3000`    |
    /// | `COOKIE_DOMAIN`        | `localhost`                |
    /// | `COOKIE_SECURE`        | `false`                    |
    ///
    /// JWT and Google settings are read by [`JwtConfig::from_env`] and
    /// [`GoogleOAuthConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let client_origin = std::env::var("CLIENT_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let cookie_domain =
            std::env::var("COOKIE_DOMAIN").unwrap_or_else(|_| "localhost".into());

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            client_origin,
            cookie_domain,
            cookie_secure,
            jwt: JwtConfig::from_env(),
            google: GoogleOAuthConfig::from_env(),
        }
    }
}
