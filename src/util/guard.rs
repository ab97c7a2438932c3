//! Route guard for signed-in-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router consults this on every protected navigation; nothing is cached
//! between attempts.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::router::Route;
use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Allow when a user is present, otherwise redirect to `/login`.
#[must_use]
pub fn can_activate(state: &SessionState) -> GuardDecision {
    if should_redirect_unauth(state) {
        GuardDecision::Redirect(Route::Login)
    } else {
        GuardDecision::Allow
    }
}

#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.user.is_none()
}
