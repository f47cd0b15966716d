//! Timing configuration for the form and banner.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a status message stays up unless dismissed.
pub const DEFAULT_MESSAGE_LIFETIME: Duration = Duration::from_millis(5000);

/// Delay before the cookie banner appears.
pub const DEFAULT_BANNER_DELAY: Duration = Duration::from_millis(1000);

/// Delay of the stand-in submission service.
pub const DEFAULT_STAND_IN_DELAY: Duration = Duration::from_millis(1500);

/// Timing knobs shared by the controller, presenter and banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    pub message_lifetime: Duration,
    pub banner_delay: Duration,
    pub stand_in_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            message_lifetime: DEFAULT_MESSAGE_LIFETIME,
            banner_delay: DEFAULT_BANNER_DELAY,
            stand_in_delay: DEFAULT_STAND_IN_DELAY,
        }
    }
}
