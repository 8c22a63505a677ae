//! Shared application state

use std::sync::Arc;

use daycoach_domain::{AppConfig, Result};
use daycoach_infra::{
    CalendarClient, CredentialStore, GoogleOAuthClient, GoogleOAuthSettings, HttpClient,
    OpenAIClient,
};

/// State handed to every route handler.
///
/// Provider clients are only present when their configuration is. Handlers
/// treat an absent client as "not configured on the server".
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: CredentialStore,
    pub google: Option<Arc<GoogleOAuthClient>>,
    pub calendar: Arc<CalendarClient>,
    pub openai: Option<Arc<OpenAIClient>>,
}

impl AppState {
    /// Build production state from loaded configuration.
    pub fn new(config: AppConfig) -> Result<Self> {
        let http_client = HttpClient::new()?;

        let google = config.google.as_ref().map(|google_config| {
            let settings = GoogleOAuthSettings::new(
                google_config.client_id.clone(),
                google_config.client_secret.clone(),
                google_config.redirect_uri.clone(),
            );
            Arc::new(GoogleOAuthClient::new(settings, http_client.clone()))
        });

        let openai = config.openai.as_ref().map(|openai_config| {
            let client = OpenAIClient::new(openai_config.api_key.clone(), http_client.clone());
            let client = match &openai_config.model {
                Some(model) => client.with_model(model.clone()),
                None => client,
            };
            Arc::new(client)
        });

        let calendar = Arc::new(CalendarClient::new(http_client));

        Ok(Self {
            config: Arc::new(config),
            credentials: CredentialStore::new(),
            google,
            calendar,
            openai,
        })
    }
}
