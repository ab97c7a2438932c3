//! Page controllers.
//!
//! Each page owns its form fields and last message, and is driven through
//! `submit` (or `logout`) with the API, the session store and the router
//! passed in by the host.

pub mod dashboard;
pub mod form;
pub mod login;
pub mod signup;
pub mod update_profile;

#[cfg(test)]
pub(crate) mod test_helpers;
