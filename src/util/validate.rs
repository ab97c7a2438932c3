//! Form field checks shared by the page controllers.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// True when the value has non-whitespace content.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Basic `local@domain.tld` shape check on the trimmed value.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}
