//! # holmen-client — HTTP Submission Client
//!
//! Delivers validated contact form submissions to a receiving service over
//! HTTP. The submission is sent as a flat JSON object in a single `POST`:
//!
//! ```text
//! POST {endpoint}
//! Authorization: Bearer {token}      (when configured)
//! Content-Type: application/json
//!
//! {"email":"","message":"hei","name":"Ola","phone":"99887766","project-type":"kitchen"}
//! ```
//!
//! Any 2xx response is an acknowledgement. A JSON body carrying
//! `{"reference": "..."}` is surfaced as [`Ack::reference`]; any other body
//! is ignored. Non-2xx responses become [`SubmissionError::Rejected`] and
//! transport failures become [`SubmissionError::Transport`].
//!
//! Requests are never retried. The receiving service may have accepted a
//! request whose response was lost, and a retry would duplicate the enquiry.

pub mod config;
pub mod error;

pub use config::{ConfigError, SubmissionConfig};
pub use error::ClientError;

use std::future::Future;
use std::time::Duration;

use holmen_core::{Ack, FormSubmission, SubmissionError, SubmissionService};

/// `SubmissionService` backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    endpoint: url::Url,
}

impl HttpSubmissionClient {
    /// Create a client from configuration.
    pub fn new(config: SubmissionConfig) -> Result<Self, ClientError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &config.api_token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ConfigError::InvalidToken)?,
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Send one submission and interpret the response.
    pub async fn post(&self, submission: &FormSubmission) -> Result<Ack, ClientError> {
        let endpoint = self.endpoint.to_string();
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                endpoint,
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        Ok(ack_from_body(resp.text().await))
    }
}

/// Maximum number of characters of a rejection body kept for the log.
pub const BODY_EXCERPT_CHARS: usize = 256;

/// The first [`BODY_EXCERPT_CHARS`] characters of `body`.
fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Acknowledgement for a 2xx response. The submission was delivered, so an
/// unreadable body only costs the reference.
fn ack_from_body<E: std::fmt::Display>(body: Result<String, E>) -> Ack {
    match body {
        Ok(body) => parse_ack(&body),
        Err(e) => {
            tracing::debug!("acknowledgement body unreadable: {e}");
            Ack::default()
        }
    }
}

/// Read an acknowledgement from a 2xx body. Bodies that are empty or not an
/// `Ack`-shaped JSON object yield an `Ack` without reference.
fn parse_ack(body: &str) -> Ack {
    if body.trim().is_empty() {
        return Ack::default();
    }
    serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::debug!("acknowledgement body ignored: {e}");
        Ack::default()
    })
}

impl SubmissionService for HttpSubmissionClient {
    fn submit(
        &self,
        submission: &FormSubmission,
    ) -> impl Future<Output = Result<Ack, SubmissionError>> + Send {
        async move {
            let ack = self.post(submission).await?;
            tracing::debug!(endpoint = %self.endpoint, reference = ?ack.reference, "submission accepted");
            Ok::<_, SubmissionError>(ack)
        }
    }

    fn service_name(&self) -> &str {
        "HttpSubmissionClient"
    }
}
