//! Shared helpers for the HTTP integration tests.
//!
//! Each test builds an [`AppState`] whose provider clients point at a single
//! wiremock server, then drives the real router with `tower::ServiceExt`.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use daycoach_domain::{
    AppConfig, GoogleOAuthConfig, OpenAiConfig, ServerConfig, REQUIRED_GOOGLE_KEYS,
};
use daycoach_infra::{
    CalendarClient, CredentialStore, GoogleOAuthClient, GoogleOAuthSettings, HttpClient,
    OpenAIClient, TokenSet,
};
use daycoach_lib::state::AppState;
use tower::ServiceExt;
use wiremock::MockServer;

pub const TEST_CLIENT_ID: &str = "test-client";
pub const TEST_CLIENT_SECRET: &str = "test-secret";
pub const TEST_REDIRECT_URI: &str = "http://localhost:3000/api/auth/google/callback";
pub const TEST_OPENAI_KEY: &str = "test-openai-key";

/// State with Google and OpenAI configured against the given mock server.
pub fn configured_state(server: &MockServer) -> AppState {
    configured_state_with_static(server, "public")
}

/// Same as [`configured_state`] but serving static files from `static_dir`.
pub fn configured_state_with_static(server: &MockServer, static_dir: &str) -> AppState {
    let http_client = HttpClient::new().expect("failed to build http client");

    let mut settings =
        GoogleOAuthSettings::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_REDIRECT_URI);
    settings.authorization_endpoint = format!("{}/auth", server.uri());
    settings.token_endpoint = format!("{}/token", server.uri());

    let google = Arc::new(GoogleOAuthClient::new(settings, http_client.clone()));
    let calendar = Arc::new(
        CalendarClient::new(http_client.clone())
            .with_api_base(format!("{}/calendar/v3", server.uri())),
    );
    let openai = Arc::new(
        OpenAIClient::new(TEST_OPENAI_KEY.to_string(), http_client)
            .with_api_url(format!("{}/v1/chat/completions", server.uri())),
    );

    let config = AppConfig {
        google: Some(GoogleOAuthConfig {
            client_id: TEST_CLIENT_ID.to_string(),
            client_secret: TEST_CLIENT_SECRET.to_string(),
            redirect_uri: TEST_REDIRECT_URI.to_string(),
        }),
        google_missing: Vec::new(),
        openai: Some(OpenAiConfig { api_key: TEST_OPENAI_KEY.to_string(), model: None }),
        server: ServerConfig { port: 0, static_dir: static_dir.to_string() },
    };

    AppState {
        config: Arc::new(config),
        credentials: CredentialStore::new(),
        google: Some(google),
        calendar,
        openai: Some(openai),
    }
}

/// State with no provider configuration at all.
pub fn unconfigured_state() -> AppState {
    let http_client = HttpClient::new().expect("failed to build http client");

    let config = AppConfig {
        google: None,
        google_missing: REQUIRED_GOOGLE_KEYS.iter().map(|key| (*key).to_string()).collect(),
        openai: None,
        server: ServerConfig::default(),
    };

    AppState {
        config: Arc::new(config),
        credentials: CredentialStore::new(),
        google: None,
        calendar: Arc::new(CalendarClient::new(http_client)),
        openai: None,
    }
}

/// Token set as stored after a successful exchange.
pub fn stored_tokens(access_token: &str, expires_in: i64) -> TokenSet {
    TokenSet::new(
        access_token.to_string(),
        Some("stored-refresh-token".to_string()),
        expires_in,
        Some("https://www.googleapis.com/auth/calendar.readonly".to_string()),
    )
}

/// Drive a GET request through a freshly built router.
pub async fn get(state: &AppState, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");

    daycoach_lib::router(state.clone())
        .oneshot(request)
        .await
        .expect("router never fails")
}

/// Drive a JSON POST request through a freshly built router.
pub async fn post_json(state: &AppState, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    daycoach_lib::router(state.clone())
        .oneshot(request)
        .await
        .expect("router never fails")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not UTF-8")
}
