//! Google OAuth 2.0 authorization-code flow
//!
//! The server acts as a confidential OAuth client. The browser is sent to
//! Google's consent screen and the authorization code comes back to the
//! callback endpoint, where it is exchanged for tokens over the back channel.
//! The client secret authenticates the exchange; no PKCE is involved.

use daycoach_domain::{DayCoachError, Result};
use reqwest::Method;
use tracing::debug;

use crate::auth::types::{OAuthError, TokenResponse, TokenSet};
use crate::errors::InfraError;
use crate::http::HttpClient;

const GOOGLE_AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Seconds before expiry at which an access token counts as expired.
const DEFAULT_REFRESH_THRESHOLD_SECONDS: i64 = 300;

/// Configuration for the Google OAuth client.
#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub scopes: Vec<String>,
    pub extra_authorize_params: Vec<(String, String)>,
    pub refresh_threshold_seconds: i64,
}

impl GoogleOAuthSettings {
    /// Create Google OAuth settings with sensible defaults.
    ///
    /// `access_type=offline` together with `prompt=consent` makes Google
    /// issue a refresh token on every exchange.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            authorization_endpoint: GOOGLE_AUTHORIZATION_ENDPOINT.to_string(),
            token_endpoint: GOOGLE_TOKEN_ENDPOINT.to_string(),
            scopes: vec![CALENDAR_READONLY_SCOPE.to_string()],
            extra_authorize_params: vec![
                ("access_type".to_string(), "offline".to_string()),
                ("prompt".to_string(), "consent".to_string()),
            ],
            refresh_threshold_seconds: DEFAULT_REFRESH_THRESHOLD_SECONDS,
        }
    }
}

/// OAuth client for the server's single Google connection.
pub struct GoogleOAuthClient {
    settings: GoogleOAuthSettings,
    http_client: HttpClient,
}

impl GoogleOAuthClient {
    pub fn new(settings: GoogleOAuthSettings, http_client: HttpClient) -> Self {
        Self { settings, http_client }
    }

    #[must_use]
    pub fn settings(&self) -> &GoogleOAuthSettings {
        &self.settings
    }

    /// Build the consent-screen URL the browser should be sent to.
    ///
    /// The `state` value is round-tripped through Google and comes back on
    /// the callback.
    #[must_use]
    pub fn authorization_url(&self, state: &str) -> String {
        let scope_string = self.settings.scopes.join(" ");

        let mut params = vec![
            ("response_type".to_string(), "code".to_string()),
            ("client_id".to_string(), self.settings.client_id.clone()),
            ("redirect_uri".to_string(), self.settings.redirect_uri.clone()),
            ("scope".to_string(), scope_string),
            ("state".to_string(), state.to_string()),
        ];
        params.extend(self.settings.extra_authorize_params.iter().cloned());

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.settings.authorization_endpoint, query_string)
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
        ];

        debug!("exchanging authorization code for tokens");
        self.request_tokens(&params).await
    }

    /// Obtain a fresh access token using a stored refresh token.
    ///
    /// Google usually omits the refresh token from this response; callers
    /// carry the previous one forward.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenSet> {
        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ];

        debug!("refreshing access token");
        self.request_tokens(&params).await
    }

    async fn request_tokens(&self, params: &[(&str, &str)]) -> Result<TokenSet> {
        let request =
            self.http_client.request(Method::POST, &self.settings.token_endpoint).form(params);
        let response = self.http_client.send(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<OAuthError>(&error_text)
                .map(|err| err.to_string())
                .unwrap_or(error_text);
            return Err(InfraError(DayCoachError::Auth(format!(
                "token request failed ({status}): {message}"
            )))
            .into());
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            InfraError(DayCoachError::Auth(format!("failed to parse token response: {e}")))
        })?;

        Ok(token_response.into())
    }
}
