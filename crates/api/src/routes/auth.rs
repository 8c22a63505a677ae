//! Google OAuth connect endpoints

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use daycoach_domain::constants::{CONNECTED_REDIRECT_PATH, DEFAULT_AUTH_STATE};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{messages, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct AuthLinkQuery {
    state: Option<String>,
}

#[derive(Debug, Serialize)]
struct AuthLinkResponse {
    #[serde(rename = "authUrl")]
    auth_url: String,
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/google", get(auth_link))
        .route("/api/auth/google/callback", get(auth_callback))
}

/// Hand the client the consent URL to navigate to.
async fn auth_link(
    State(state): State<AppState>,
    Query(query): Query<AuthLinkQuery>,
) -> Result<Json<AuthLinkResponse>, ApiError> {
    let Some(google) = state.google.as_ref() else {
        return Err(ApiError::GoogleNotConfigured {
            missing: state.config.google_missing.clone(),
        });
    };

    let request_state = query
        .state
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_AUTH_STATE.to_string());

    Ok(Json(AuthLinkResponse {
        auth_url: google.authorization_url(&request_state),
    }))
}

/// Trade the authorization code for tokens and bounce back to the client.
///
/// The browser lands here directly, so errors answer as plain text rather
/// than the JSON error body.
async fn auth_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(google) = state.google.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::GOOGLE_UNCONFIGURED.to_string(),
        )
            .into_response();
    };

    let Some(code) = query.code.filter(|code| !code.is_empty()) else {
        return (StatusCode::BAD_REQUEST, messages::MISSING_CODE.to_string()).into_response();
    };

    match google.exchange_code(&code).await {
        Ok(tokens) => {
            state.credentials.store(tokens);
            info!("google credential stored after code exchange");
            (StatusCode::FOUND, [(header::LOCATION, CONNECTED_REDIRECT_PATH)]).into_response()
        }
        Err(err) => {
            error!(error = %err, "google code exchange failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to complete Google authentication: {err}"),
            )
                .into_response()
        }
    }
}
