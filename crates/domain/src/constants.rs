//! Application constants
//!
//! Centralized location for domain-level constants shared across crates.

// Calendar normalization
pub const NO_TITLE_PLACEHOLDER: &str = "(No title)";

// OAuth flow
pub const DEFAULT_AUTH_STATE: &str = "daycoach";
pub const CONNECTED_REDIRECT_PATH: &str = "/?connected=google";
