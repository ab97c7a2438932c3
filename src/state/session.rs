//! Session state and its reducer.
//!
//! DESIGN
//! ======
//! `reduce` is a pure function of `(state, action)`. Persistence and logging
//! live in [`crate::state::store::SessionStore`], which is the only caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ProfileUpdate, User};

/// The persisted session. `user` present means authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<User>,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Identity fields merged into the session after signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupIdentity {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Replace the session user.
    LoginSuccess(User),
    /// Merge identity fields, creating the user if none exists.
    Signup(SignupIdentity),
    /// Merge profile fields into an existing user; no-op without one.
    UpdateUser(ProfileUpdate),
    /// Back to the initial state.
    Logout,
}

impl SessionAction {
    /// Stable label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoginSuccess(_) => "login_success",
            Self::Signup(_) => "signup",
            Self::UpdateUser(_) => "update_user",
            Self::Logout => "logout",
        }
    }
}

#[must_use]
pub fn reduce(state: SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::LoginSuccess(user) => SessionState { user: Some(user) },
        SessionAction::Signup(identity) => {
            let user = match state.user {
                Some(existing) => User { id: identity.id, name: identity.name, email: identity.email, ..existing },
                None => User { id: identity.id, name: identity.name, email: identity.email, phone: None },
            };
            SessionState { user: Some(user) }
        }
        SessionAction::UpdateUser(fields) => SessionState {
            user: state.user.map(|existing| User {
                name: fields.name,
                email: fields.email,
                phone: Some(fields.phone),
                ..existing
            }),
        },
        SessionAction::Logout => SessionState::default(),
    }
}
