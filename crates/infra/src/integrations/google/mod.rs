//! Google integration
//!
//! Provides the OAuth 2.0 authorization-code flow for the server's single
//! Google connection and a read-only Calendar API client.

pub mod calendar;
pub mod oauth;

pub use calendar::{day_window, CalendarClient};
pub use oauth::{GoogleOAuthClient, GoogleOAuthSettings};
