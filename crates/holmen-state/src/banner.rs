//! # Consent Banner State
//!
//! ```text
//! Unknown ──show──▶ Shown ──decide──▶ Accepted | Declined
//!    │                                      ▲
//!    └──────── restore / early decide ──────┘
//! ```
//!
//! `Accepted` and `Declined` are terminal for the lifetime of the persisted
//! choice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use holmen_core::ConsentChoice;

use crate::transition::TransitionRecord;

/// Visibility state of the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerState {
    /// No choice known yet and the banner is not on screen.
    #[default]
    Unknown,
    /// The banner is on screen awaiting an answer.
    Shown,
    /// The visitor accepted cookies.
    Accepted,
    /// The visitor declined cookies.
    Declined,
}

impl BannerState {
    /// Returns the canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Shown => "SHOWN",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Declined)
    }

    /// The decision this state represents, if any.
    pub fn choice(&self) -> Option<ConsentChoice> {
        match self {
            Self::Accepted => Some(ConsentChoice::Accepted),
            Self::Declined => Some(ConsentChoice::Declined),
            Self::Unknown | Self::Shown => None,
        }
    }
}

impl From<ConsentChoice> for BannerState {
    fn from(choice: ConsentChoice) -> Self {
        match choice {
            ConsentChoice::Accepted => Self::Accepted,
            ConsentChoice::Declined => Self::Declined,
        }
    }
}

impl std::fmt::Display for BannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from the banner state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BannerError {
    /// Attempted transition is not allowed by the state machine.
    #[error("invalid banner transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },
}

impl From<BannerError> for holmen_core::HolmenError {
    fn from(e: BannerError) -> Self {
        holmen_core::HolmenError::InvalidTransition(e.to_string())
    }
}

/// Banner state plus its transition log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsentBannerState {
    state: BannerState,
    transition_log: Vec<TransitionRecord>,
}

impl ConsentBannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Access the transition log.
    pub fn transition_log(&self) -> &[TransitionRecord] {
        &self.transition_log
    }

    fn transition(&mut self, to: BannerState, reason: &str) -> Result<(), BannerError> {
        let valid = matches!(
            (self.state, to),
            (BannerState::Unknown, BannerState::Shown)
                | (BannerState::Unknown, BannerState::Accepted)
                | (BannerState::Unknown, BannerState::Declined)
                | (BannerState::Shown, BannerState::Accepted)
                | (BannerState::Shown, BannerState::Declined)
        );
        if !valid {
            return Err(BannerError::InvalidTransition {
                from: self.state.name().to_string(),
                to: to.name().to_string(),
            });
        }
        self.transition_log.push(TransitionRecord::now(
            self.state.name(),
            to.name(),
            Some(reason.to_string()),
        ));
        self.state = to;
        Ok(())
    }

    /// Put the banner on screen (UNKNOWN → SHOWN).
    pub fn show(&mut self) -> Result<(), BannerError> {
        self.transition(BannerState::Shown, "no stored choice")
    }

    /// Adopt a persisted choice at start-up (UNKNOWN → ACCEPTED | DECLINED).
    pub fn restore(&mut self, choice: ConsentChoice) -> Result<(), BannerError> {
        if self.state != BannerState::Unknown {
            return Err(BannerError::InvalidTransition {
                from: self.state.name().to_string(),
                to: BannerState::from(choice).name().to_string(),
            });
        }
        self.transition(choice.into(), "restored from storage")
    }

    /// Record the visitor's answer (UNKNOWN | SHOWN → ACCEPTED | DECLINED).
    pub fn decide(&mut self, choice: ConsentChoice) -> Result<(), BannerError> {
        self.transition(choice.into(), "visitor decision")
    }
}
