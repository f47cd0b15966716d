//! Fixed-delay stand-in for a real submission service.

use std::future::Future;
use std::time::Duration;

use holmen_core::{Ack, FormSubmission, SubmissionError, SubmissionService};

use crate::config::DEFAULT_STAND_IN_DELAY;

/// Waits a fixed delay, then acknowledges every submission.
#[derive(Debug, Clone, Copy)]
pub struct DelayedSubmitter {
    delay: Duration,
}

impl DelayedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DelayedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_STAND_IN_DELAY)
    }
}

impl SubmissionService for DelayedSubmitter {
    fn submit(
        &self,
        submission: &FormSubmission,
    ) -> impl Future<Output = Result<Ack, SubmissionError>> + Send {
        let delay = self.delay;
        let fields = submission.len();
        async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(fields, ?delay, "stand-in submission acknowledged");
            Ok(Ack::default())
        }
    }

    fn service_name(&self) -> &str {
        "DelayedSubmitter"
    }
}
