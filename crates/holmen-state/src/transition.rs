//! Transition log entries shared by both state machines.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single accepted state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State before the transition.
    pub from_state: String,
    /// State after the transition.
    pub to_state: String,
    /// When the transition occurred (UTC, seconds precision).
    pub timestamp: DateTime<Utc>,
    /// Human-readable reason for the transition.
    pub reason: Option<String>,
}

impl TransitionRecord {
    pub(crate) fn now(from: &str, to: &str, reason: Option<String>) -> Self {
        Self {
            from_state: from.to_string(),
            to_state: to.to_string(),
            timestamp: Utc::now().trunc_subsecs(0),
            reason,
        }
    }
}
