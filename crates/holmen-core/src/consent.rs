//! Cookie consent choice and its persisted representation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key under which the choice is persisted.
pub const CONSENT_STORAGE_KEY: &str = "cookieConsent";

/// The visitor's answer to the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    /// Persisted string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl std::fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `accepted` nor `declined`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized consent value: {0:?}")]
pub struct UnknownConsent(pub String);

impl FromStr for ConsentChoice {
    type Err = UnknownConsent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(UnknownConsent(other.to_string())),
        }
    }
}
