//! Form validation.
//!
//! Checks run in a fixed order (email, name, age, gender, roll number) and
//! the first failure is reported. A bad email is reported whatever else is
//! wrong with the form. Validation is pure; it never touches storage.

use thiserror::Error;
use tracing::trace;

use crate::record::{Gender, RecordFields, RecordForm, RollNumber};

/// Why a form was rejected.
///
/// The `Display` text is the reason shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field was empty.
    #[error("name required")]
    NameRequired,

    /// The email field was empty or had no `@`.
    #[error("invalid email")]
    InvalidEmail,

    /// The age field was not a run of decimal digits.
    #[error("age must be an integer")]
    AgeNotInteger,

    /// The gender was not one of the accepted values.
    #[error("gender must be Male, Female, or Other")]
    InvalidGender,

    /// The supplied roll number does not look like `22CSRnnn`.
    #[error("bad identifier format")]
    BadIdentifierFormat,
}

/// Validate a form, optionally together with the roll number it targets.
///
/// Pass `roll_no` only on the update path; create generates its own roll
/// number and delete accepts any non-empty string. An empty `roll_no` is
/// treated the same as `None`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] that applies.
pub fn validate(
    form: &RecordForm,
    roll_no: Option<&str>,
) -> Result<RecordFields, ValidationError> {
    if !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    if form.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let age = parse_age(&form.age)?;

    let gender: Gender = form
        .gender
        .parse()
        .map_err(|_| ValidationError::InvalidGender)?;

    // An empty roll number counts as not supplied.
    if let Some(roll_no) = roll_no.filter(|r| !r.is_empty()) {
        if !RollNumber::is_well_formed(roll_no) {
            return Err(ValidationError::BadIdentifierFormat);
        }
    }

    trace!(name = %form.name, age, %gender, "form accepted");
    Ok(RecordFields {
        name: form.name.clone(),
        email: form.email.clone(),
        age,
        gender,
    })
}

/// Digits only; no sign, no whitespace, no range check.
fn parse_age(text: &str) -> Result<i64, ValidationError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::AgeNotInteger);
    }
    // All digits but too long for i64.
    text.parse().map_err(|_| ValidationError::AgeNotInteger)
}
