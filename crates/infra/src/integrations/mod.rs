//! External service integrations

pub mod google;
pub mod openai;

pub use google::{CalendarClient, GoogleOAuthClient, GoogleOAuthSettings};
pub use openai::{build_coaching_prompt, OpenAIClient};
