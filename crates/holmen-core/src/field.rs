//! # Form Field Identifiers
//!
//! Every field of the contact form has a `FieldId`. The string form is both
//! the element id and the `name` attribute used when the form is enumerated.

use serde::{Deserialize, Serialize};

/// A named field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    /// Sender's name (required).
    Name,
    /// Sender's phone number (required, Norwegian format).
    Phone,
    /// Sender's email address (optional).
    Email,
    /// Kind of project the inquiry is about (required).
    ProjectType,
    /// Free-text message (required).
    Message,
    /// Bot trap. Hidden from humans; must stay empty.
    Website,
}

impl FieldId {
    /// All fields, in form order.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Email,
        FieldId::ProjectType,
        FieldId::Message,
        FieldId::Website,
    ];

    /// Fields that must be non-empty before submission.
    pub const REQUIRED: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::ProjectType,
        FieldId::Message,
    ];

    /// Element id and form name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::ProjectType => "project-type",
            Self::Message => "message",
            Self::Website => "website",
        }
    }

    /// Look a field up by its element id.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Whether this is the honeypot field.
    pub fn is_honeypot(&self) -> bool {
        matches!(self, Self::Website)
    }

    /// Whether the field must be filled in.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
