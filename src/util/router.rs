//! Route table and navigation state.
//!
//! Controllers navigate through [`Router::navigate`], which runs the auth
//! guard for protected routes.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::fmt;

use super::guard::{GuardDecision, can_activate};
use crate::state::session::SessionState;

/// Oldest entries are dropped once history reaches this length.
pub const HISTORY_LIMIT: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    UpdateProfile,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::UpdateProfile => "/update-profile",
        }
    }

    /// Resolve a URL path. The empty path redirects to login.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_matches('/') {
            "" | "login" => Some(Self::Login),
            "signup" => Some(Self::Signup),
            "dashboard" => Some(Self::Dashboard),
            "update-profile" => Some(Self::UpdateProfile),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard | Self::UpdateProfile)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self { current: Route::Login, history: vec![Route::Login] }
    }
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Routes entered, oldest first, including guard redirects. Keeps at
    /// most [`HISTORY_LIMIT`] entries.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Navigate to `target`. Returns `false` when the guard denied it, in
    /// which case the router is already on the redirect route.
    pub fn navigate(&mut self, target: Route, session: &SessionState) -> bool {
        if target.is_protected() {
            if let GuardDecision::Redirect(to) = can_activate(session) {
                tracing::info!(denied = %target, redirect = %to, "navigation blocked by auth guard");
                self.enter(to);
                return false;
            }
        }
        self.enter(target);
        true
    }

    /// Navigate by URL path. Unknown paths are ignored and return `false`.
    pub fn navigate_path(&mut self, path: &str, session: &SessionState) -> bool {
        match Route::from_path(path) {
            Some(route) => self.navigate(route, session),
            None => {
                tracing::warn!(%path, "unknown route");
                false
            }
        }
    }

    fn enter(&mut self, route: Route) {
        tracing::debug!(from = %self.current, to = %route, "navigate");
        self.current = route;
        self.history.push(route);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }
}
