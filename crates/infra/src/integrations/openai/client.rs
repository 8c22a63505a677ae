//! OpenAI API client for coaching analysis

use daycoach_domain::DayCoachError;
use reqwest::Method;
use tracing::debug;

use crate::http::HttpClient;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAIError};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Answer returned when the API produces no usable content.
const NO_ANALYSIS_FALLBACK: &str = "No analysis generated.";

/// OpenAI API client for generating daily coaching analyses
pub struct OpenAIClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    pub fn new(api_key: String, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_url: OPENAI_API_URL.to_string(),
        }
    }

    /// Create a new client with custom model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create a new client with custom API URL (primarily for tests)
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Send a prompt to the Chat Completions API and return the answer text.
    ///
    /// The prompt is sent as a single user message. When the response carries
    /// no choices or an empty answer, a fixed fallback line is returned
    /// instead of an error.
    ///
    /// # Errors
    /// Returns `OpenAIError` for network failures, API error statuses, or
    /// responses that do not match the expected schema.
    pub async fn complete(&self, prompt: String) -> Result<String, OpenAIError> {
        let request_payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage { role: "user".to_string(), content: prompt }],
            temperature: DEFAULT_TEMPERATURE,
        };

        let request_builder = self
            .http_client
            .request(Method::POST, &self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_payload);

        let response = self.http_client.send(request_builder).await.map_err(|err| match err {
            DayCoachError::Network(msg) => OpenAIError::Network(msg),
            other => OpenAIError::Network(format!("HTTP error: {}", other)),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received OpenAI API response");

        if !status.is_success() {
            return Err(self.handle_error_status(status.as_u16(), response).await);
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OpenAIError::InvalidSchema(format!("Failed to parse response: {}", e)))?;

        let analysis = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_ANALYSIS_FALLBACK.to_string());

        Ok(analysis)
    }

    /// Handle HTTP error status codes
    async fn handle_error_status(&self, status: u16, response: reqwest::Response) -> OpenAIError {
        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 | 403 => OpenAIError::Authentication(format!("Invalid API key ({})", status)),
            429 => {
                // Rate limit - default to a 60s retry window
                OpenAIError::RateLimit(60)
            }
            _ => OpenAIError::Api { status, message },
        }
    }
}
