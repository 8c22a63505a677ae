//! Google Calendar read access
//!
//! Fetches the events of a single local day from the primary calendar and
//! normalizes them into the flat shape the web client renders. Recurring
//! events are expanded server-side by Google (`singleEvents=true`).

use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone};
use daycoach_domain::constants::NO_TITLE_PLACEHOLDER;
use daycoach_domain::{CalendarEvent, DayCoachError, Result};
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::errors::InfraError;
use crate::http::HttpClient;

const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
const PRIMARY_CALENDAR_ID: &str = "primary";

/// Read-only client for the Google Calendar API.
pub struct CalendarClient {
    http_client: HttpClient,
    api_base: String,
}

impl CalendarClient {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, api_base: GOOGLE_CALENDAR_API_BASE.to_string() }
    }

    /// Override the API base URL, e.g. to point at a mock server.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Fetch the primary calendar's events for the local day containing
    /// `now`.
    pub async fn fetch_today(
        &self,
        access_token: &str,
        now: DateTime<Local>,
    ) -> Result<Vec<CalendarEvent>> {
        let (time_min, time_max) = day_window(now)?;
        self.fetch_events(access_token, PRIMARY_CALENDAR_ID, time_min, time_max).await
    }

    /// Fetch events in `[time_min, time_max)`, expanded and ordered by start
    /// time.
    pub async fn fetch_events(
        &self,
        access_token: &str,
        calendar_id: &str,
        time_min: DateTime<Local>,
        time_max: DateTime<Local>,
    ) -> Result<Vec<CalendarEvent>> {
        let url = format!("{}/calendars/{}/events", self.api_base, calendar_id);
        let query_params = [
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
            ("timeMin", time_min.to_rfc3339()),
            ("timeMax", time_max.to_rfc3339()),
        ];

        let request = self
            .http_client
            .request(Method::GET, &url)
            .bearer_auth(access_token)
            .query(&query_params);
        let response = self.http_client.send(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InfraError(DayCoachError::Network(format!(
                "Google API error ({}): {}",
                status, error_text
            )))
            .into());
        }

        let google_response: GoogleEventsResponse = response.json().await.map_err(|e| {
            InfraError(DayCoachError::InvalidInput(format!(
                "Failed to parse Google response: {}",
                e
            )))
        })?;

        let events: Vec<CalendarEvent> =
            google_response.items.into_iter().map(normalize_event).collect();
        debug!(count = events.len(), "fetched calendar events");

        Ok(events)
    }
}

/// Compute the local-midnight-to-midnight window containing `now`.
///
/// Both bounds keep the local offset so the window tracks the server's
/// timezone. On days where midnight does not exist (DST gaps) the earliest
/// valid instant is used.
pub fn day_window(now: DateTime<Local>) -> Result<(DateTime<Local>, DateTime<Local>)> {
    let start_naive = now.date_naive().and_time(NaiveTime::MIN);
    let end_naive = start_naive + Duration::days(1);

    let start = Local.from_local_datetime(&start_naive).earliest().ok_or_else(|| {
        DayCoachError::Internal(format!("no valid local instant for {start_naive}"))
    })?;
    let end = Local.from_local_datetime(&end_naive).earliest().ok_or_else(|| {
        DayCoachError::Internal(format!("no valid local instant for {end_naive}"))
    })?;

    Ok((start, end))
}

fn normalize_event(event: GoogleCalendarEvent) -> CalendarEvent {
    let GoogleCalendarEvent { id, summary, description, start, end } = event;

    let title = summary
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| NO_TITLE_PLACEHOLDER.to_string());

    CalendarEvent {
        id,
        title,
        start: start.date_time.or(start.date).unwrap_or_default(),
        end: end.date_time.or(end.date).unwrap_or_default(),
        description: description.unwrap_or_default(),
    }
}

#[derive(Debug, Deserialize)]
struct GoogleEventsResponse {
    #[serde(default)]
    items: Vec<GoogleCalendarEvent>,
}

#[derive(Debug, Deserialize)]
struct GoogleCalendarEvent {
    id: String,
    summary: Option<String>,
    description: Option<String>,
    start: EventDateTime,
    end: EventDateTime,
}

/// Google event boundary: timed events carry `dateTime`, all-day events
/// carry `date`.
#[derive(Debug, Deserialize)]
struct EventDateTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
    date: Option<String>,
}
