//! Google OAuth 2.0 sign-in.
//!
//! The OAuth callback receives an authorization code from the browser. It is
//! exchanged for a Google access token, which is then used once to fetch the
//! user's profile from the userinfo endpoint. Nothing from Google is stored
//! apart from the profile fields copied onto the local user.
//!
//! Handlers only see the [`IdentityProvider`] trait, so tests can install a
//! stub instead of talking to Google.

use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenResponse, TokenUrl,
};
use serde::Deserialize;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google OAuth client credentials.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Must match the redirect URI registered with Google; it points back at
    /// `GET /api/v1/auth/google`.
    pub redirect_url: String,
}

impl GoogleOAuthConfig {
    /// Load Google credentials from environment variables.
    ///
    /// | Env Var                      | Required | Default                                    |
    /// |------------------------------|----------|--------------------------------------------|
    /// | `GOOGLE_OAUTH_CLIENT_ID`     | **yes**  | --                                         |
    /// | `GOOGLE_OAUTH_CLIENT_SECRET` | **yes**  | --                                         |
    /// | `GOOGLE_OAUTH_REDIRECT_URL`  | no       | `http://localhost:8080/api/v1/auth/google` |
    ///
    /// # Panics
    ///
    /// Panics if the client id or secret is missing.
    pub fn from_env() -> Self {
        let client_id = std::env::var("GOOGLE_OAUTH_CLIENT_ID")
            .expect("GOOGLE_OAUTH_CLIENT_ID must be set in the environment");
        let client_secret = std::env::var("GOOGLE_OAUTH_CLIENT_SECRET")
            .expect("GOOGLE_OAUTH_CLIENT_SECRET must be set in the environment");
        let redirect_url = std::env::var("GOOGLE_OAUTH_REDIRECT_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/v1/auth/google".into());

        Self {
            client_id,
            client_secret,
            redirect_url,
        }
    }
}

/// Profile returned by an identity provider after a successful exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderProfile {
    /// The provider's stable id for the account.
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub verified_email: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Failure talking to the identity provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The authorization code was rejected or the token endpoint failed.
    #[error("Token exchange failed: {0}")]
    Exchange(String),

    /// The userinfo request failed or returned an unexpected body.
    #[error("Profile request failed: {0}")]
    Profile(String),
}

/// Exchanges an authorization code for the signed-in user's profile.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name recorded on users created through it.
    fn name(&self) -> &'static str;

    async fn fetch_profile(&self, code: &str) -> Result<ProviderProfile, ProviderError>;
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// [`IdentityProvider`] backed by Google.
pub struct GoogleProvider {
    client: ConfiguredClient,
    http: reqwest::Client,
}

impl GoogleProvider {
    /// Build the OAuth client. Fails if a configured URL is malformed.
    pub fn new(config: &GoogleOAuthConfig) -> Result<Self, String> {
        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(GOOGLE_AUTH_URL.to_string()).map_err(|e| e.to_string())?)
            .set_token_uri(TokenUrl::new(GOOGLE_TOKEN_URL.to_string()).map_err(|e| e.to_string())?)
            .set_redirect_uri(
                RedirectUrl::new(config.redirect_url.clone()).map_err(|e| e.to_string())?,
            );

        // The token endpoint must not be followed through redirects.
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { client, http })
    }
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn fetch_profile(&self, code: &str) -> Result<ProviderProfile, ProviderError> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| ProviderError::Exchange(e.to_string()))?;

        let profile = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ProviderError::Profile(e.to_string()))?
            .json::<ProviderProfile>()
            .await
            .map_err(|e| ProviderError::Profile(e.to_string()))?;

        tracing::debug!(email = %profile.email, "Fetched Google profile");
        Ok(profile)
    }
}
