//! API error responses
//!
//! Handlers return `ApiError` and let `IntoResponse` shape the JSON body.
//! Every body carries an `error` string; the OAuth configuration error also
//! lists the missing environment variables so the client can show them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// User-facing message strings shared between handlers and tests.
pub mod messages {
    pub const GOOGLE_UNCONFIGURED: &str = "Google OAuth is not configured on the server.";
    pub const NOT_CONNECTED: &str =
        "Google Calendar is not connected. Click connect and authorize first.";
    pub const MISSING_GOAL: &str = "Please include a goal string.";
    pub const OPENAI_UNCONFIGURED: &str = "OpenAI API key is not configured on server.";
    pub const MISSING_CODE: &str = "Missing \"code\" query parameter.";
}

/// Errors surfaced by the JSON API endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// Google OAuth variables are absent; carries their names.
    GoogleNotConfigured { missing: Vec<String> },
    /// No Google credential has been stored yet.
    NotConnected,
    /// Analyze request arrived without a usable goal.
    MissingGoal,
    /// `OPENAI_API_KEY` is not set.
    OpenAiNotConfigured,
    /// Calendar read failed; carries the underlying message.
    CalendarFetch(String),
    /// Completion request failed; carries the underlying message.
    Analysis(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<Vec<String>>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), missing: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::GoogleNotConfigured { missing } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: messages::GOOGLE_UNCONFIGURED.to_string(),
                    missing: Some(missing),
                },
            ),
            Self::NotConnected => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new(messages::NOT_CONNECTED),
            ),
            Self::MissingGoal => (StatusCode::BAD_REQUEST, ErrorBody::new(messages::MISSING_GOAL)),
            Self::OpenAiNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(messages::OPENAI_UNCONFIGURED),
            ),
            Self::CalendarFetch(detail) => {
                error!(%detail, "calendar fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(format!("Unable to load calendar events: {detail}")),
                )
            }
            Self::Analysis(detail) => {
                error!(%detail, "analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(format!("AI analysis failed: {detail}")),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
