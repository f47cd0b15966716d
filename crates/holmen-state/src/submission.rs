//! # Submission Lifecycle
//!
//! Explicit per-form submission state.
//!
//! ## Allowed Transitions
//!
//! ```text
//!           ┌──────────── rejected (bot / invalid) ───────────┐
//!           ▼                                                  │
//!         Idle ──begin──▶ Validating ──accept──▶ Submitting ──finish──▶ Done
//!                             ▲                                          │
//!                             └───────────────── begin ──────────────────┘
//! ```
//!
//! `Validating` and `Submitting` are busy states: a new attempt may only
//! begin from `Idle` or `Done`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transition::TransitionRecord;

/// State of one form's submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionState {
    /// No attempt has been made, or the last one was rejected before sending.
    #[default]
    Idle,
    /// Honeypot and field rules are being checked.
    Validating,
    /// The submission collaborator has been called and not yet answered.
    Submitting,
    /// The last attempt reached the collaborator and finished.
    Done,
}

impl SubmissionState {
    /// Returns the canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Validating => "VALIDATING",
            Self::Submitting => "SUBMITTING",
            Self::Done => "DONE",
        }
    }

    /// Whether an attempt is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    /// Whether `self → to` is in the transition table.
    pub fn can_transition_to(&self, to: SubmissionState) -> bool {
        matches!(
            (*self, to),
            (Self::Idle, Self::Validating)
                | (Self::Done, Self::Validating)
                | (Self::Validating, Self::Idle)
                | (Self::Validating, Self::Submitting)
                | (Self::Submitting, Self::Done)
        )
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from the submission lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStateError {
    /// Attempted transition is not allowed by the state machine.
    #[error("invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },
}

impl From<SubmissionStateError> for holmen_core::HolmenError {
    fn from(e: SubmissionStateError) -> Self {
        holmen_core::HolmenError::InvalidTransition(e.to_string())
    }
}

/// Submission state of one form plus its transition log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionLifecycle {
    state: SubmissionState,
    transition_log: Vec<TransitionRecord>,
}

impl SubmissionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Access the transition log.
    pub fn transition_log(&self) -> &[TransitionRecord] {
        &self.transition_log
    }

    /// Attempt a state transition with runtime validation.
    ///
    /// Records the transition in the log on success.
    pub fn try_transition(
        &mut self,
        to: SubmissionState,
        reason: Option<String>,
    ) -> Result<(), SubmissionStateError> {
        if !self.state.can_transition_to(to) {
            return Err(SubmissionStateError::InvalidTransition {
                from: self.state.name().to_string(),
                to: to.name().to_string(),
            });
        }
        self.transition_log
            .push(TransitionRecord::now(self.state.name(), to.name(), reason));
        self.state = to;
        Ok(())
    }

    /// Start a new attempt (IDLE | DONE → VALIDATING).
    pub fn begin(&mut self) -> Result<(), SubmissionStateError> {
        self.try_transition(SubmissionState::Validating, Some("submit triggered".into()))
    }

    /// Drop the attempt before sending (VALIDATING → IDLE).
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), SubmissionStateError> {
        self.try_transition(SubmissionState::Idle, Some(reason.into()))
    }

    /// Hand the attempt to the collaborator (VALIDATING → SUBMITTING).
    pub fn accept(&mut self) -> Result<(), SubmissionStateError> {
        self.try_transition(SubmissionState::Submitting, Some("validation passed".into()))
    }

    /// Close the attempt (SUBMITTING → DONE).
    pub fn finish(&mut self, reason: impl Into<String>) -> Result<(), SubmissionStateError> {
        self.try_transition(SubmissionState::Done, Some(reason.into()))
    }
}
