//! Application configuration types
//!
//! Resolved once at startup from environment variables. Provider sections
//! are optional: the server keeps running when Google or OpenAI is not
//! configured and the matching endpoints report the gap instead.

/// Environment variables required for the Google OAuth integration.
pub const REQUIRED_GOOGLE_KEYS: [&str; 3] = [
    "GOOGLE_CLIENT_ID",
    "GOOGLE_CLIENT_SECRET",
    "GOOGLE_REDIRECT_URI",
];

/// Default TCP port for the HTTP server.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory served as the static web client.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Google OAuth settings, present only when every required key is set.
    pub google: Option<GoogleOAuthConfig>,
    /// Names of the Google environment variables that were not set.
    pub google_missing: Vec<String>,
    /// OpenAI settings, present only when an API key is set.
    pub openai: Option<OpenAiConfig>,
    pub server: ServerConfig,
}

impl AppConfig {
    #[must_use]
    pub fn google_configured(&self) -> bool {
        self.google.is_some()
    }

    #[must_use]
    pub fn openai_configured(&self) -> bool {
        self.openai.is_some()
    }
}

/// Google OAuth client credentials.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// OpenAI API settings.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Optional model override; the client falls back to its default.
    pub model: Option<String>,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}
