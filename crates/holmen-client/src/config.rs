//! Submission client configuration.
//!
//! Points the client at the endpoint that receives contact form submissions.
//! Loaded from the environment or built explicitly for tests.

use url::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP submission client.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct SubmissionConfig {
    /// Endpoint receiving `POST` requests with the submission as JSON.
    pub endpoint: Url,
    /// Optional bearer token for the receiving service.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SubmissionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SubmissionConfig {
    /// Configuration for `endpoint` with no token and the default timeout.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Parse `raw` as the endpoint URL.
    pub fn for_endpoint(raw: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
        Ok(Self::new(endpoint))
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `HOLMEN_SUBMIT_URL` (required)
    /// - `HOLMEN_SUBMIT_TOKEN` (optional; empty counts as unset)
    /// - `HOLMEN_SUBMIT_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("HOLMEN_SUBMIT_URL").ok_or(ConfigError::MissingEndpoint)?;
        let endpoint = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl("HOLMEN_SUBMIT_URL".to_string(), e.to_string()))?;

        Ok(Self {
            endpoint,
            api_token: lookup("HOLMEN_SUBMIT_TOKEN").filter(|t| !t.is_empty()),
            timeout_secs: lookup("HOLMEN_SUBMIT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOLMEN_SUBMIT_URL environment variable is required")]
    MissingEndpoint,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("API token is not a valid header value")]
    InvalidToken,
}
