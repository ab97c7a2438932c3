//! Form errors and the user-facing messages they map to.
//!
//! Messages carry a translation key for the view layer plus English text as
//! the fallback rendering.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::ApiError;
use crate::util::validate::{is_email, is_present};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    Phone,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Phone => "Phone",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Name => "FORM.REQUIRED.NAME",
            Self::Email => "FORM.REQUIRED.EMAIL",
            Self::Password => "FORM.REQUIRED.PASSWORD",
            Self::Phone => "FORM.REQUIRED.PHONE",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{} is required.", .0.label())]
    Required(Field),

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Request failed. Please try again.")]
    Request(#[source] ApiError),
}

impl FormError {
    /// Translation key for the message.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Required(field) => field.key(),
            Self::InvalidEmail => "FORM.INVALID_EMAIL",
            Self::Request(_) => "FORM.REQUEST_FAILED",
        }
    }

    /// Client-side failure that blocked the request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Request(_))
    }
}

/// A message ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub key: &'static str,
    pub text: String,
}

impl From<&FormError> for FormMessage {
    fn from(err: &FormError) -> Self {
        Self { key: err.message_key(), text: err.to_string() }
    }
}

/// Check fields in order: every required field present, then email shape.
///
/// # Errors
///
/// Returns the first failing check.
pub fn check_fields(required: &[(Field, &str)], email: Option<&str>) -> Result<(), FormError> {
    if let Some((field, _)) = required.iter().find(|(_, value)| !is_present(value)) {
        return Err(FormError::Required(*field));
    }
    if let Some(email) = email {
        if !is_email(email) {
            return Err(FormError::InvalidEmail);
        }
    }
    Ok(())
}
