//! Request and response wire types
//!
//! Field names follow the JSON wire format exchanged with the web client.

use serde::{Deserialize, Serialize};

/// A normalized calendar event as served by `/api/calendar/today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    /// Event summary, `(No title)` when the provider omits one.
    pub title: String,
    /// RFC 3339 timestamp for timed events, `YYYY-MM-DD` for all-day events.
    pub start: String,
    pub end: String,
    pub description: String,
}

/// A client-supplied event reference inside an analysis request.
///
/// Events echo back whatever the client loaded earlier; every field may be
/// absent and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// The user's stated goal. Requests without one are rejected.
    pub goal: Option<String>,
    #[serde(default)]
    pub events: Vec<EventSummary>,
    pub notes: Option<String>,
    /// Structured self-report captured by the client. Accepted but not
    /// folded into the coaching prompt.
    pub student_profile: Option<StudentProfile>,
}

/// Structured self-report fields from the web client form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub sleep_hours: Option<String>,
    pub study_focus: Option<String>,
    pub energy_level: Option<String>,
    pub stress_level: Option<String>,
    pub spent_today: Option<String>,
    pub workout: Option<String>,
    pub academics_notes: Option<String>,
    pub social_notes: Option<String>,
    pub wellbeing_notes: Option<String>,
}
