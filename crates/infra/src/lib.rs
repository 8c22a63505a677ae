//! # DayCoach Infrastructure
//!
//! Infrastructure implementations behind the DayCoach HTTP API.
//!
//! This crate contains:
//! - HTTP client wrapper shared by every integration
//! - OAuth token types and the in-memory credential store
//! - External service integrations (Google Calendar, OpenAI)
//! - Environment-based configuration loading
//!
//! ## Architecture
//! - Depends only on `daycoach-domain`
//! - Contains all "impure" code (network I/O, environment access)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use auth::*;
pub use http::*;
pub use integrations::*;
