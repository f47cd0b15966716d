//! # Field Validation
//!
//! Decides whether a contact form is well-formed before any network
//! interaction. Three rules run in a fixed order and the first failure wins,
//! so exactly one message is surfaced per attempt:
//!
//! 1. [`Rule::RequiredFields`]: Name, phone, project type and message are
//!    non-empty. Values are not trimmed; a field holding only spaces counts as
//!    filled.
//! 2. [`Rule::PhoneFormat`]: The phone, whitespace removed, is Norwegian.
//! 3. [`Rule::EmailFormat`]: A non-empty email looks like `local@domain.tld`.
//!
//! Validation is a pure function of the current field values.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::field::FieldId;
use crate::phone::{NorwegianPhone, FORM_WHITESPACE_CLASS};
use crate::submission::FormSubmission;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{FORM_WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

/// The five field values the validator reads directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
    /// Optional; an empty email is never validated.
    pub email: String,
}

impl ContactFields {
    /// Read the fields through an accessor keyed by [`FieldId`].
    pub fn read(mut field: impl FnMut(FieldId) -> String) -> Self {
        Self {
            name: field(FieldId::Name),
            phone: field(FieldId::Phone),
            project_type: field(FieldId::ProjectType),
            message: field(FieldId::Message),
            email: field(FieldId::Email),
        }
    }

    /// Take the fields from an assembled submission. Missing names read as empty.
    pub fn from_submission(submission: &FormSubmission) -> Self {
        Self::read(|id| submission.get(id).unwrap_or_default().to_string())
    }

    /// Value of one of the five validated fields. The honeypot reads as empty.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::ProjectType => &self.project_type,
            FieldId::Message => &self.message,
            FieldId::Email => &self.email,
            FieldId::Website => "",
        }
    }
}

/// Outcome of one validation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The user-facing message, if validation failed.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e.message()),
        }
    }

    /// Convert into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(e) => Err(e),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(r: Result<(), ValidationError>) -> Self {
        match r {
            Ok(()) => Self::Valid,
            Err(e) => Self::Invalid(e),
        }
    }
}

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RequiredFields,
    PhoneFormat,
    EmailFormat,
}

impl Rule {
    /// Evaluation order. The first failing rule decides the message.
    pub const ORDER: [Rule; 3] = [Rule::RequiredFields, Rule::PhoneFormat, Rule::EmailFormat];

    /// Apply this rule alone.
    pub fn check(&self, fields: &ContactFields) -> Result<(), ValidationError> {
        match self {
            Self::RequiredFields => {
                if FieldId::REQUIRED.iter().any(|f| fields.get(*f).is_empty()) {
                    return Err(ValidationError::MissingRequired);
                }
                Ok(())
            }
            Self::PhoneFormat => NorwegianPhone::parse(&fields.phone).map(|_| ()),
            Self::EmailFormat => {
                if fields.email.is_empty() || EMAIL_PATTERN.is_match(&fields.email) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidEmail)
                }
            }
        }
    }
}

/// Run every rule in [`Rule::ORDER`], stopping at the first failure.
pub fn validate(fields: &ContactFields) -> ValidationResult {
    Rule::ORDER
        .iter()
        .try_for_each(|rule| rule.check(fields))
        .into()
}
