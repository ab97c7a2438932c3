//! Persisted session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for the signed-in user. Every dispatch runs the
//! reducer and then writes the whole state under one storage key; `open`
//! rehydrates from that key at startup.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never block a transition. A failed write is logged and
//! the in-memory state still advances; an unreadable stored value
//! rehydrates as the initial state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use super::session::{SessionAction, SessionState, reduce};
use crate::net::types::User;
use crate::util::storage::KeyValueStore;

pub struct SessionStore {
    state: SessionState,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    /// Rehydrate from `storage[key]`.
    pub fn open(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match storage.get(&key) {
            Some(raw) => match serde_json::from_str::<SessionState>(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(error = %e, %key, "discarding unreadable persisted session");
                    SessionState::default()
                }
            },
            None => SessionState::default(),
        };
        tracing::debug!(%key, authenticated = state.is_authenticated(), "session rehydrated");
        Self { state, storage, key }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Apply `action` and persist the result.
    pub fn dispatch(&mut self, action: SessionAction) {
        let kind = action.kind();
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        tracing::debug!(action = kind, authenticated = self.state.is_authenticated(), "session dispatch");
        self.persist();
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.state) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &raw) {
            tracing::warn!(error = %e, key = %self.key, "failed to persist session");
        }
    }
}
