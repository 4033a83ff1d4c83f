//! Contact form validation.
//!
//! Submission never leaves the page: a valid form produces a success
//! notification and a reset, an invalid one an error notification and no
//! reset. Messages are the site's user-facing copy.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::notify::NotificationKind;

pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, completa todos los campos requeridos.";
pub const INVALID_EMAIL_MESSAGE: &str = "Por favor, ingresa un correo electrónico válido.";
pub const SUCCESS_MESSAGE: &str = "¡Mensaje enviado correctamente! Gracias por contactarnos.";

/// `local@domain.tld` shape: no whitespace or extra `@` anywhere, and a dot
/// somewhere after the `@`. U+FEFF counts as whitespace, as it does in browsers.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern compiles")
});

/// Browser whitespace: Unicode `White_Space` plus the byte-order mark.
fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,
}

/// Trimmed field values. A field whose element is missing reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Build from raw element values, trimming surrounding whitespace.
    #[must_use]
    pub fn from_raw(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Self {
        let clean = |raw: Option<&str>| {
            raw.map(|value| value.trim_matches(is_form_whitespace))
                .unwrap_or_default()
                .to_owned()
        };
        Self { name: clean(name), email: clean(email), message: clean(message) }
    }
}

/// Whether `email` has the conservative `x@y.z` shape.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Required fields first, then the email shape.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_email_shaped(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// What the page should do in response to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub message: &'static str,
    pub kind: NotificationKind,
    /// Clear the form back to its defaults.
    pub reset: bool,
}

#[must_use]
pub fn submission_outcome(fields: &ContactFields) -> SubmissionOutcome {
    match validate(fields) {
        Ok(()) => SubmissionOutcome { message: SUCCESS_MESSAGE, kind: NotificationKind::Success, reset: true },
        Err(err) => SubmissionOutcome { message: err.message(), kind: NotificationKind::Error, reset: false },
    }
}

impl ValidationError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => MISSING_FIELDS_MESSAGE,
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}
