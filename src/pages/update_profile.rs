//! Update-profile page controller.

#[cfg(test)]
#[path = "update_profile_test.rs"]
mod update_profile_test;

use super::form::{Field, FormError, FormMessage, check_fields};
use crate::net::api::AuthApi;
use crate::net::types::{ProfileUpdate, User};
use crate::state::session::SessionAction;
use crate::state::store::SessionStore;
use crate::util::router::{Route, Router};

#[derive(Clone, Debug, Default)]
pub struct UpdateProfilePage {
    pub name: String,
    pub email: String,
    pub phone: String,
    message: Option<FormMessage>,
}

impl UpdateProfilePage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from the signed-in user.
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            message: None,
        }
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
                (Field::Phone, self.phone.as_str()),
            ],
            Some(self.email.as_str()),
        )
    }

    /// Validate, `PUT /users/me`, merge the submitted fields into the session
    /// and go to the dashboard.
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

        let details = ProfileUpdate { name: self.name.clone(), email: self.email.clone(), phone: self.phone.clone() };
        match api.update_profile(&details).await {
            Ok(_) => {
                tracing::info!("profile updated");
                store.dispatch(SessionAction::UpdateUser(details));
                self.message = None;
                router.navigate(Route::Dashboard, store.state());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile update failed");
                let err = FormError::Request(e);
                self.message = Some(FormMessage::from(&err));
                Err(err)
            }
        }
    }
}
