//! Core record types for rollbook.
//!
//! A [`Record`] is one student entry: a storage-assigned id, an immutable
//! roll number, and the mutable [`RecordFields`]. Raw front-end input
//! arrives as a [`RecordForm`] and only becomes `RecordFields` through
//! [`crate::validate::validate`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Year prefix of every roll number.
pub const ROLL_YEAR: &str = "22";

/// Department prefix of every roll number.
pub const ROLL_DEPARTMENT: &str = "CSR";

/// Number of sequence digits at the end of a roll number.
pub const ROLL_SEQUENCE_DIGITS: usize = 3;

/// Total length of a roll number.
pub const ROLL_LEN: usize = ROLL_YEAR.len() + ROLL_DEPARTMENT.len() + ROLL_SEQUENCE_DIGITS;

/// Largest sequence number a roll number can carry.
pub const ROLL_SEQUENCE_MAX: i64 = 999;

/// A user-facing student identifier such as `22CSR007`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollNumber(String);

impl RollNumber {
    /// Build the roll number for the given sequence number.
    ///
    /// Returns `None` when the sequence does not fit in three digits.
    #[must_use]
    pub fn from_sequence(sequence: i64) -> Option<Self> {
        if !(1..=ROLL_SEQUENCE_MAX).contains(&sequence) {
            return None;
        }
        Some(Self(format!("{ROLL_YEAR}{ROLL_DEPARTMENT}{sequence:03}")))
    }

    /// Parse a roll number, accepting only the fixed `22CSRnnn` shape.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::is_well_formed(text).then(|| Self(text.to_string()))
    }

    /// Check whether `text` has the fixed roll number shape.
    #[must_use]
    pub fn is_well_formed(text: &str) -> bool {
        let prefix_len = ROLL_YEAR.len() + ROLL_DEPARTMENT.len();
        text.len() == ROLL_LEN
            && text.starts_with(ROLL_YEAR)
            && text[ROLL_YEAR.len()..].starts_with(ROLL_DEPARTMENT)
            && text[prefix_len..].bytes().all(|b| b.is_ascii_digit())
    }

    /// Wrap a value read back from storage without re-checking its shape.
    ///
    /// Rows written by older tools may carry roll numbers that never went
    /// through [`RollNumber::parse`]; they are still addressable.
    #[must_use]
    pub(crate) fn from_stored(text: String) -> Self {
        Self(text)
    }

    /// The roll number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RollNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gender of a student, from a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other answer.
    Other,
}

impl Gender {
    /// Every accepted value, in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// The exact string stored and accepted for this value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the accepted genders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

/// Raw field strings collected by a front end, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    /// Student name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Age as typed.
    pub age: String,
    /// Gender as typed or selected.
    pub gender: String,
}

impl RecordForm {
    /// Create a form from its four fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
            gender: gender.into(),
        }
    }
}

/// The mutable fields of a record, after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    /// Student name, never empty.
    pub name: String,
    /// Email address, always contains `@`.
    pub email: String,
    /// Age in years.
    pub age: i64,
    /// Gender.
    pub gender: Gender,
}

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Storage-assigned key, strictly increasing.
    pub internal_id: i64,
    /// User-facing identifier, fixed at creation.
    pub roll_no: RollNumber,
    /// Everything else.
    #[serde(flatten)]
    pub fields: RecordFields,
}
