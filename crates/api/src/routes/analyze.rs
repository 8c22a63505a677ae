//! Daily coaching analysis

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use daycoach_domain::AnalyzeRequest;
use daycoach_infra::build_coaching_prompt;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    analysis: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/analyze", post(analyze_day))
}

/// Turn the goal, echoed events, and notes into a coaching analysis.
///
/// Events come back from the client exactly as `/api/calendar/today` served
/// them; the server does not re-read the calendar here.
async fn analyze_day(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let goal = request
        .goal
        .as_deref()
        .filter(|goal| !goal.trim().is_empty())
        .ok_or(ApiError::MissingGoal)?;

    let Some(openai) = state.openai.as_ref() else {
        return Err(ApiError::OpenAiNotConfigured);
    };

    let prompt = build_coaching_prompt(goal, &request.events, request.notes.as_deref());

    let analysis = openai
        .complete(prompt)
        .await
        .map_err(|err| ApiError::Analysis(err.to_string()))?;

    Ok(Json(AnalyzeResponse { analysis }))
}
