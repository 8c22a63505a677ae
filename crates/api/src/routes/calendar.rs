//! Today's calendar read

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use daycoach_domain::CalendarEvent;
use daycoach_infra::TokenSet;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct EventsResponse {
    events: Vec<CalendarEvent>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/calendar/today", get(today_events))
}

/// Serve the connected account's events for the current local day.
async fn today_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, ApiError> {
    let Some(tokens) = state.credentials.current() else {
        return Err(ApiError::NotConnected);
    };

    let tokens = refresh_if_expired(&state, tokens).await;

    let events = state
        .calendar
        .fetch_today(&tokens.access_token, Local::now())
        .await
        .map_err(|err| ApiError::CalendarFetch(err.to_string()))?;

    Ok(Json(EventsResponse { events }))
}

/// Swap an expiring access token for a fresh one when possible.
///
/// Refresh failures fall back to the stored token so the calendar read can
/// report its own error; the stored credential is never cleared here.
async fn refresh_if_expired(state: &AppState, tokens: TokenSet) -> TokenSet {
    let Some(google) = state.google.as_ref() else {
        return tokens;
    };

    if !tokens.is_expired(google.settings().refresh_threshold_seconds) {
        return tokens;
    }

    let Some(refresh_token) = tokens.refresh_token.clone() else {
        warn!("stored google credential is expiring and has no refresh token");
        return tokens;
    };

    match google.refresh(&refresh_token).await {
        Ok(mut refreshed) => {
            // Google omits the refresh token on refresh responses
            if refreshed.refresh_token.is_none() {
                refreshed.refresh_token = Some(refresh_token);
            }
            state.credentials.store(refreshed.clone());
            info!("google access token refreshed");
            refreshed
        }
        Err(err) => {
            warn!(error = %err, "token refresh failed, keeping stored credential");
            tokens
        }
    }
}
