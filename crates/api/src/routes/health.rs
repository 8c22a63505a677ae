//! Capability probe

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub google_configured: bool,
    pub google_missing: Vec<String>,
    #[serde(rename = "openAIConfigured")]
    pub openai_configured: bool,
    pub connected_to_google: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health_probe))
}

/// Report configuration and connection state without calling any provider.
async fn health_probe(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        google_configured: state.config.google_configured(),
        google_missing: state.config.google_missing.clone(),
        openai_configured: state.config.openai_configured(),
        connected_to_google: state.credentials.is_connected(),
    })
}
