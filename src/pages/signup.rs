//! Signup page controller.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::form::{Field, FormError, FormMessage, check_fields};
use crate::net::api::AuthApi;
use crate::net::types::SignupRequest;
use crate::state::session::{SessionAction, SignupIdentity};
use crate::state::store::SessionStore;
use crate::util::router::{Route, Router};

#[derive(Clone, Debug, Default)]
pub struct SignupPage {
    pub name: String,
    pub email: String,
    pub password: String,
    message: Option<FormMessage>,
}

impl SignupPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// # Errors
    ///
    /// Returns the first failing field check.
    pub fn validate(&self) -> Result<(), FormError> {
        check_fields(
            &[
                (Field::Name, self.name.as_str()),
                (Field::Email, self.email.as_str()),
                (Field::Password, self.password.as_str()),
            ],
            Some(self.email.as_str()),
        )
    }

    /// Validate, register, merge the new identity into the session and go to
    /// the dashboard. The session takes the server-assigned id and the name
    /// and email as entered.
    ///
    /// # Errors
    ///
    /// Returns a validation error (no request made) or the request failure.
    pub async fn submit<A>(&mut self, api: &A, store: &mut SessionStore, router: &mut Router) -> Result<(), FormError>
    where
        A: AuthApi + ?Sized,
    {
        if let Err(e) = self.validate() {
            self.message = Some(FormMessage::from(&e));
            return Err(e);
        }

        let payload = SignupRequest { name: self.name.clone(), email: self.email.clone(), password: self.password.clone() };
        match api.signup(&payload).await {
            Ok(created) => {
                tracing::info!(user_id = created.id, "signup succeeded");
                store.dispatch(SessionAction::Signup(SignupIdentity {
                    id: created.id,
                    name: payload.name,
                    email: payload.email,
                }));
                self.message = None;
                router.navigate(Route::Dashboard, store.state());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "signup failed");
                let err = FormError::Request(e);
                self.message = Some(FormMessage::from(&err));
                Err(err)
            }
        }
    }
}
