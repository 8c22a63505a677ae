//! OpenAI integration for daily coaching analysis
//!
//! Provides a thin client for the Chat Completions API plus the prompt
//! builder that turns a goal, today's events, and notes into the coaching
//! request.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::OpenAIClient;
pub use prompt::build_coaching_prompt;
pub use types::OpenAIError;
