//! # Submission Port
//!
//! The asynchronous collaborator that receives a validated form. The wire
//! format belongs to the adapter; the core only sees `Ack` or
//! `SubmissionError`.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::submission::FormSubmission;

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Receipt or ticket reference, when the receiving service issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Receives contact form submissions.
///
/// Implementations must be `Send + Sync` so a controller can share them
/// across tasks behind an `Arc`.
pub trait SubmissionService: Send + Sync {
    /// Deliver one submission.
    fn submit(
        &self,
        submission: &FormSubmission,
    ) -> impl Future<Output = Result<Ack, SubmissionError>> + Send;

    /// Human-readable name of the implementation, for logs.
    fn service_name(&self) -> &str;
}

impl<T: SubmissionService> SubmissionService for std::sync::Arc<T> {
    fn submit(
        &self,
        submission: &FormSubmission,
    ) -> impl Future<Output = Result<Ack, SubmissionError>> + Send {
        (**self).submit(submission)
    }

    fn service_name(&self) -> &str {
        (**self).service_name()
    }
}
