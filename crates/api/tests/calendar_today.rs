//! Integration tests for the calendar read.
//!
//! `GET /api/calendar/today` serves the connected account's events for the
//! current local day, refreshing the stored token first when it is about to
//! expire.

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::{body_json, configured_state, get, stored_tokens};

const EVENTS_PATH: &str = "/calendar/v3/calendars/primary/events";

// ============================================================================
// Connection and normalization
// ============================================================================

#[tokio::test]
async fn test_today_requires_a_stored_credential() {
    let server = MockServer::start().await;
    let state = configured_state(&server);

    let response = get(&state, "/api/calendar/today").await;

    assert_eq!(response.status(), 401);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        json!("Google Calendar is not connected. Click connect and authorize first.")
    );
}

#[tokio::test]
async fn test_today_returns_normalized_events() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    state.credentials.store(stored_tokens("fresh-access", 3600));

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(header("authorization", "Bearer fresh-access"))
        .and(query_param("singleEvents", "true"))
        .and(query_param("orderBy", "startTime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": "evt-1",
                    "summary": "Team standup",
                    "description": "Daily sync",
                    "start": { "dateTime": "2026-03-12T09:00:00+01:00" },
                    "end": { "dateTime": "2026-03-12T09:15:00+01:00" }
                },
                {
                    "id": "evt-2",
                    "start": { "date": "2026-03-12" },
                    "end": { "date": "2026-03-13" }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = get(&state, "/api/calendar/today").await;

    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "events": [
                {
                    "id": "evt-1",
                    "title": "Team standup",
                    "start": "2026-03-12T09:00:00+01:00",
                    "end": "2026-03-12T09:15:00+01:00",
                    "description": "Daily sync"
                },
                {
                    "id": "evt-2",
                    "title": "(No title)",
                    "start": "2026-03-12",
                    "end": "2026-03-13",
                    "description": ""
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_today_maps_provider_failure() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    state.credentials.store(stored_tokens("fresh-access", 3600));

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("calendar backend exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let response = get(&state, "/api/calendar/today").await;

    assert_eq!(response.status(), 500);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error should be a string");
    assert!(
        message.starts_with("Unable to load calendar events:"),
        "Unexpected error message: {message}"
    );
    assert!(message.contains("Google API error"));
}

// ============================================================================
// Token refresh
// ============================================================================

#[tokio::test]
async fn test_today_refreshes_an_expiring_token() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    // 60s left is inside the 300s refresh threshold
    state.credentials.store(stored_tokens("stale-access", 60));

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=stored-refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "refreshed-access",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(header("authorization", "Bearer refreshed-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = get(&state, "/api/calendar/today").await;
    assert_eq!(response.status(), 200);

    let stored = state.credentials.current().expect("credential should remain stored");
    assert_eq!(stored.access_token, "refreshed-access");
    assert_eq!(
        stored.refresh_token.as_deref(),
        Some("stored-refresh-token"),
        "Should carry the refresh token forward when Google omits it"
    );
}

#[tokio::test]
async fn test_today_keeps_stored_token_when_refresh_fails() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    state.credentials.store(stored_tokens("stale-access", 60));

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("refresh backend down"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(header("authorization", "Bearer stale-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = get(&state, "/api/calendar/today").await;

    assert_eq!(response.status(), 200, "Fetch should proceed with the stored token");
    let stored = state.credentials.current().expect("credential should remain stored");
    assert_eq!(stored.access_token, "stale-access", "Failed refresh should not clear the slot");
}

#[tokio::test]
async fn test_today_skips_refresh_for_fresh_tokens() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    state.credentials.store(stored_tokens("fresh-access", 7200));

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = get(&state, "/api/calendar/today").await;
    assert_eq!(response.status(), 200);
}
