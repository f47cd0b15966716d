//! # Submission Controller
//!
//! Orchestrates one submit action:
//!
//! 1. **Guard**: A trigger while an attempt is in flight is ignored.
//! 2. **Honeypot**: A filled `website` field aborts silently.
//! 3. **Validation**: The first failing rule is shown as an error message.
//! 4. **Busy state**: The submit control is disabled and relabelled; a
//!    scoped guard restores it on every exit path, including a panic in the
//!    service or the future being dropped mid-flight.
//! 5. **Submission**: Success shows a thank-you message and clears the form;
//!    failure is logged and reported with generic retry advice.
//!
//! The lifecycle lives in a [`SubmissionLifecycle`] owned by the controller,
//! not in the control's disabled attribute.

use std::sync::Arc;

use parking_lot::Mutex;

use holmen_core::{
    text, validate, Ack, ContactFields, FieldId, FormSubmission, StatusKind, SubmissionError,
    SubmissionService, ValidationError, ValidationResult,
};
use holmen_state::{SubmissionLifecycle, SubmissionState, SubmissionStateError, TransitionRecord};

use crate::config::FormConfig;
use crate::ports::FormSurface;
use crate::presenter::StatusPresenter;

/// What a submit action ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was in flight; nothing happened.
    Ignored,
    /// The honeypot was filled; nothing was shown or sent.
    BotRejected,
    /// A validation rule failed; its message is on screen.
    Invalid(ValidationError),
    /// The service acknowledged the submission; the form was cleared.
    Submitted(Ack),
    /// The service failed; a retry message is on screen.
    Failed(SubmissionError),
}

/// Controller for one contact form instance.
pub struct ContactFormController<D: ?Sized, S> {
    surface: Arc<D>,
    service: S,
    presenter: StatusPresenter<D>,
    lifecycle: Mutex<SubmissionLifecycle>,
}

impl<D, S> ContactFormController<D, S>
where
    D: FormSurface + ?Sized + 'static,
    S: SubmissionService,
{
    pub fn new(surface: Arc<D>, service: S, config: &FormConfig) -> Self {
        let presenter = StatusPresenter::new(Arc::clone(&surface), config.message_lifetime);
        Self {
            surface,
            service,
            presenter,
            lifecycle: Mutex::new(SubmissionLifecycle::new()),
        }
    }

    /// The presenter, for wiring the message close button.
    pub fn presenter(&self) -> &StatusPresenter<D> {
        &self.presenter
    }

    pub fn state(&self) -> SubmissionState {
        self.lifecycle.lock().state()
    }

    /// Copy of the lifecycle's transition log.
    pub fn transition_log(&self) -> Vec<TransitionRecord> {
        self.lifecycle.lock().transition_log().to_vec()
    }

    /// Handle a submit action on the form.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        let begun = self.lifecycle.lock().begin();
        if let Err(e) = begun {
            tracing::debug!("submit ignored: {e}");
            return SubmitOutcome::Ignored;
        }

        if !self.surface.field(FieldId::Website).is_empty() {
            tracing::debug!("bot detected, submission dropped");
            self.advance(|l| l.reject("honeypot filled"));
            return SubmitOutcome::BotRejected;
        }

        let submission = FormSubmission::from_named_fields(self.surface.named_fields());
        let fields = ContactFields::read(|id| self.surface.field(id));
        if let ValidationResult::Invalid(err) = validate(&fields) {
            self.presenter.show(err.message(), StatusKind::Error);
            self.advance(|l| l.reject(format!("validation failed: {err:?}")));
            return SubmitOutcome::Invalid(err);
        }

        self.advance(SubmissionLifecycle::accept);
        let guard = BusyGuard::engage(&*self.surface, &self.lifecycle);

        match self.service.submit(&submission).await {
            Ok(ack) => {
                tracing::info!(
                    service = self.service.service_name(),
                    reference = ack.reference.as_deref().unwrap_or("-"),
                    "contact form submitted"
                );
                self.presenter.show(text::SUBMIT_SUCCESS, StatusKind::Success);
                self.surface.reset_fields();
                guard.complete("acknowledged");
                SubmitOutcome::Submitted(ack)
            }
            Err(e) => {
                tracing::error!(
                    service = self.service.service_name(),
                    error = %e,
                    "form submission error"
                );
                self.presenter.show(text::SUBMIT_FAILURE, StatusKind::Error);
                guard.complete("failed");
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn advance(
        &self,
        step: impl FnOnce(&mut SubmissionLifecycle) -> Result<(), SubmissionStateError>,
    ) {
        if let Err(e) = step(&mut self.lifecycle.lock()) {
            tracing::warn!("submission lifecycle out of step: {e}");
        }
    }
}

/// Holds the submit control busy for the duration of a submission.
///
/// Dropping the guard restores the original label, re-enables the control,
/// and closes the lifecycle attempt.
struct BusyGuard<'a, D: FormSurface + ?Sized> {
    surface: &'a D,
    lifecycle: &'a Mutex<SubmissionLifecycle>,
    original_label: String,
    outcome: &'static str,
}

impl<'a, D: FormSurface + ?Sized> BusyGuard<'a, D> {
    fn engage(surface: &'a D, lifecycle: &'a Mutex<SubmissionLifecycle>) -> Self {
        let original_label = surface.submit_label();
        surface.set_submit_label(text::SENDING_LABEL);
        surface.set_control_busy(true);
        Self {
            surface,
            lifecycle,
            original_label,
            outcome: "aborted",
        }
    }

    fn complete(mut self, outcome: &'static str) {
        self.outcome = outcome;
    }
}

impl<D: FormSurface + ?Sized> Drop for BusyGuard<'_, D> {
    fn drop(&mut self) {
        self.surface.set_submit_label(&self.original_label);
        self.surface.set_control_busy(false);
        if let Err(e) = self.lifecycle.lock().finish(self.outcome) {
            tracing::warn!("submission lifecycle out of step: {e}");
        }
    }
}
