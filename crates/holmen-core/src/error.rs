//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the Holmen workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors display the exact Norwegian text shown to the user.
//! - Submission errors carry diagnostic detail for the log. That detail is
//!   never rendered on the page.
//! - Bot detection is not an error and has no variant here.

use thiserror::Error;

use crate::text;

/// Top-level error type for the contact form core.
#[derive(Error, Debug)]
pub enum HolmenError {
    /// The form input failed a validation rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The submission collaborator failed.
    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// The persistence collaborator failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// State machine transition rejected.
    #[error("invalid state transition: {0}")]
    InvalidTransition(String),
}

/// A failed validation rule.
///
/// `Display` yields the user-facing message, so the error can be rendered
/// directly as a status message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the four required fields is empty.
    #[error("{}", text::MISSING_REQUIRED)]
    MissingRequired,

    /// The phone number is not a Norwegian number.
    #[error("{}", text::INVALID_PHONE)]
    InvalidPhone,

    /// The optional email is present but malformed.
    #[error("{}", text::INVALID_EMAIL)]
    InvalidEmail,
}

impl ValidationError {
    /// The message shown to the user for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingRequired => text::MISSING_REQUIRED,
            Self::InvalidPhone => text::INVALID_PHONE,
            Self::InvalidEmail => text::INVALID_EMAIL,
        }
    }
}

/// Failure reported by a submission collaborator.
///
/// Always treated as transient: the user is advised to retry or call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The receiving service answered with a non-success status.
    #[error("submission rejected with status {status}: {body}")]
    Rejected {
        /// HTTP-like status code returned by the service.
        status: u16,
        /// Response body excerpt.
        body: String,
    },

    /// No collaborator is available to take the submission.
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Failure reported by the key-value persistence collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored content could not be decoded.
    #[error("corrupt store content: {0}")]
    Corrupt(String),
}
