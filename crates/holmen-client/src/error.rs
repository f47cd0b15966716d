//! Submission client error types.

use holmen_core::SubmissionError;

/// Errors from submission calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Receiving service returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl From<ClientError> for SubmissionError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Http { .. } => SubmissionError::Transport(e.to_string()),
            ClientError::ApiError { status, body, .. } => SubmissionError::Rejected { status, body },
            ClientError::Config(_) => SubmissionError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_maps_to_rejected() {
        let e = ClientError::ApiError {
            endpoint: "http://127.0.0.1/contact".into(),
            status: 422,
            body: "bad".into(),
        };
        assert_eq!(
            SubmissionError::from(e),
            SubmissionError::Rejected {
                status: 422,
                body: "bad".into()
            }
        );
    }

    #[test]
    fn config_error_maps_to_unavailable() {
        let e = ClientError::Config(crate::config::ConfigError::MissingEndpoint);
        assert!(matches!(
            SubmissionError::from(e),
            SubmissionError::Unavailable(msg) if msg.contains("HOLMEN_SUBMIT_URL")
        ));
    }
}
