//! Login page controller: email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::form::{Field, FormError, FormMessage, check_fields};
use crate::net::api::AuthApi;
use crate::state::session::SessionAction;
use crate::state::store::SessionStore;
use crate::util::router::{Route, Router};

#[derive(Clone, Debug, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    message: Option<FormMessage>,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last surfaced error, cleared on success.
    #[must_use]
    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// # Errors
    ///
    /// Returns the first failing field check.
    pub fn validate(&self) -> Result<(), FormError> {
        check_fields(
            &[(Field::Email, self.email.as_str()), (Field::Password, self.password.as_str())],
            Some(self.email.as_str()),
        )
    }

    /// Validate, log in, store the user and go to the dashboard.
    ///
    /// Credentials go to the server exactly as typed; trimming only applies
    /// to the required-field check.
    ///
    /// # Errors
    ///
    /// Returns a validation error (no request made) or the request failure.
    /// Session and route are untouched on error.
    pub async fn submit<A>(&mut self, api: &A, store: &mut SessionStore, router: &mut Router) -> Result<(), FormError>
    where
        A: AuthApi + ?Sized,
    {
        if let Err(e) = self.validate() {
            self.message = Some(FormMessage::from(&e));
            return Err(e);
        }

        match api.login(&self.email, &self.password).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "login succeeded");
                store.dispatch(SessionAction::LoginSuccess(user));
                self.message = None;
                router.navigate(Route::Dashboard, store.state());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                let err = FormError::Request(e);
                self.message = Some(FormMessage::from(&err));
                Err(err)
            }
        }
    }
}
