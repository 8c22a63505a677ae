//! OAuth token types and credential storage
//!
//! Token shapes follow RFC 6749; storage is a single in-memory slot for the
//! one Google connection the server manages.

pub mod store;
pub mod types;

pub use store::CredentialStore;
pub use types::{OAuthError, TokenResponse, TokenSet};
