//! # Status Messages
//!
//! The transient message shown above the contact form after a validation or
//! submission outcome. At most one is visible at a time; lifetime management
//! lives in `holmen-form`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text;

/// Identity of one rendered status message node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Generate a new random message identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message:{}", self.0)
    }
}

/// Visual treatment of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Class list applied to the message element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "form-message form-message-success",
            Self::Error => "form-message form-message-error",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message to render, with the dismiss affordance label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub id: MessageId,
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    /// Create a message with a fresh identity.
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            kind,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, StatusKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusKind::Error)
    }

    /// Accessible label of the close button.
    pub fn dismiss_label(&self) -> &'static str {
        text::DISMISS_LABEL
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}
