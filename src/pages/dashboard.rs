//! Dashboard controller: shows the signed-in user and handles logout.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::AuthApi;
use crate::net::types::User;
use crate::state::session::SessionAction;
use crate::state::store::SessionStore;
use crate::util::router::{Route, Router};

#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardPage;

impl DashboardPage {
    /// Current user, read fresh from the store.
    #[must_use]
    pub fn user(store: &SessionStore) -> Option<&User> {
        store.user()
    }

    /// Notify the backend, clear the session and return to login.
    ///
    /// The backend call is best effort: its failure is logged and the local
    /// session is cleared regardless.
    pub async fn logout<A>(api: &A, store: &mut SessionStore, router: &mut Router)
    where
        A: AuthApi + ?Sized,
    {
        if let Err(e) = api.logout().await {
            tracing::warn!(error = %e, "logout request failed; clearing local session anyway");
        }
        store.dispatch(SessionAction::Logout);
        router.navigate(Route::Login, store.state());
        tracing::info!("logged out");
    }
}
