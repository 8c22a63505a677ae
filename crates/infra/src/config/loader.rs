//! Configuration loader
//!
//! Loads application configuration from environment variables.
//!
//! ## Environment Variables
//! - `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` / `GOOGLE_REDIRECT_URI`:
//!   Google OAuth client; all three must be set for the integration to
//!   activate
//! - `OPENAI_API_KEY`: OpenAI API key; unset disables analysis
//! - `OPENAI_MODEL`: Optional model override
//! - `PORT`: HTTP listen port (default 3000)
//! - `DAYCOACH_STATIC_DIR`: Directory served as the web client (default
//!   `public`)
//!
//! Missing provider variables are not an error. The capability probe reports
//! them and the matching endpoints answer with a configuration message until
//! the variables are supplied. Empty values count as unset.

use daycoach_domain::{
    AppConfig, DayCoachError, GoogleOAuthConfig, OpenAiConfig, Result, ServerConfig, DEFAULT_PORT,
    DEFAULT_STATIC_DIR, REQUIRED_GOOGLE_KEYS,
};

/// Load application configuration from the environment.
///
/// # Errors
/// Returns `DayCoachError::Config` if `PORT` is set but is not a valid TCP
/// port. Missing provider variables never fail the load.
pub fn load() -> Result<AppConfig> {
    let (google, google_missing) = load_google_config();
    let openai = load_openai_config();
    let server = load_server_config()?;

    Ok(AppConfig { google, google_missing, openai, server })
}

fn load_google_config() -> (Option<GoogleOAuthConfig>, Vec<String>) {
    let client_id = optional_env(REQUIRED_GOOGLE_KEYS[0]);
    let client_secret = optional_env(REQUIRED_GOOGLE_KEYS[1]);
    let redirect_uri = optional_env(REQUIRED_GOOGLE_KEYS[2]);

    let mut missing = Vec::new();
    let present = [client_id.is_some(), client_secret.is_some(), redirect_uri.is_some()];
    for (key, is_present) in REQUIRED_GOOGLE_KEYS.iter().zip(present) {
        if !is_present {
            missing.push((*key).to_string());
        }
    }

    match (client_id, client_secret, redirect_uri) {
        (Some(client_id), Some(client_secret), Some(redirect_uri)) => {
            (Some(GoogleOAuthConfig { client_id, client_secret, redirect_uri }), missing)
        }
        _ => (None, missing),
    }
}

fn load_openai_config() -> Option<OpenAiConfig> {
    optional_env("OPENAI_API_KEY")
        .map(|api_key| OpenAiConfig { api_key, model: optional_env("OPENAI_MODEL") })
}

fn load_server_config() -> Result<ServerConfig> {
    let port = match optional_env("PORT") {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|e| DayCoachError::Config(format!("Invalid PORT value: {}", e)))?,
        None => DEFAULT_PORT,
    };

    let static_dir =
        optional_env("DAYCOACH_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

    Ok(ServerConfig { port, static_dir })
}

/// Get optional environment variable, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
