//! In-memory credential storage
//!
//! The server manages exactly one Google connection, held in a single slot.
//! Connecting again overwrites the previous credential and nothing is
//! persisted across restarts.

use std::sync::Arc;

use parking_lot::RwLock;

use super::types::TokenSet;

/// Thread-safe single-slot store for the Google credential.
///
/// Cloning the store shares the slot, so every request handler observes the
/// same connection state.
#[derive(Clone, Default)]
pub struct CredentialStore {
    slot: Arc<RwLock<Option<TokenSet>>>,
}

impl CredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a credential, replacing any previous one.
    pub fn store(&self, tokens: TokenSet) {
        *self.slot.write() = Some(tokens);
    }

    /// Snapshot of the current credential, if connected.
    #[must_use]
    pub fn current(&self) -> Option<TokenSet> {
        self.slot.read().clone()
    }

    /// Whether a credential is currently stored.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.slot.read().is_some()
    }
}
